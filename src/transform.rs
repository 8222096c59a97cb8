//! Text transformation pipeline shared by `ccopy` and `cpaste`.
//!
//! Enabled options are turned into an ordered list of [`Step`]s. The order is
//! fixed regardless of which options are set:
//!
//! 1. trim leading and trailing whitespace
//! 2. uppercase
//! 3. lowercase
//! 4. strip trailing `\n` characters
//! 5. truncate to the maximum length
//!
//! Uppercase and lowercase may both be enabled. Lowercase runs later, so it
//! decides the result.
//!
//! Lengths are counted in Unicode scalar values, so truncation never splits a
//! multi-byte character. For ASCII input this is the same as a byte count.

/// Options controlling which pipeline steps run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransformOptions {
    pub trim: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub strip_trailing_newline: bool,
    /// Keep at most this many characters. `None` disables the limit.
    pub max_length: Option<usize>,
}

impl TransformOptions {
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::from_options(self)
    }

    pub fn apply(&self, text: &str) -> String {
        self.pipeline().apply(text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Trim,
    Uppercase,
    Lowercase,
    StripTrailingNewline,
    Truncate(usize),
}

impl Step {
    fn run(self, text: String) -> String {
        match self {
            Step::Trim => text.trim().to_owned(),
            Step::Uppercase => text.to_uppercase(),
            Step::Lowercase => text.to_lowercase(),
            Step::StripTrailingNewline => {
                let kept = text.trim_end_matches('\n').len();
                let mut text = text;
                text.truncate(kept);
                text
            }
            Step::Truncate(limit) => truncate_chars(text, limit),
        }
    }
}

fn truncate_chars(mut text: String, limit: usize) -> String {
    if let Some((cut, _)) = text.char_indices().nth(limit) {
        text.truncate(cut);
    }
    text
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    pub fn from_options(opts: &TransformOptions) -> Self {
        let mut steps = Vec::with_capacity(5);
        if opts.trim {
            steps.push(Step::Trim);
        }
        if opts.uppercase {
            steps.push(Step::Uppercase);
        }
        if opts.lowercase {
            steps.push(Step::Lowercase);
        }
        if opts.strip_trailing_newline {
            steps.push(Step::StripTrailingNewline);
        }
        if let Some(limit) = opts.max_length.filter(|&n| n > 0) {
            steps.push(Step::Truncate(limit));
        }
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn apply(&self, text: &str) -> String {
        self.steps.iter().fold(text.to_owned(), |text, step| {
            tracing::trace!(?step, len = text.len(), "applying transform");
            step.run(text)
        })
    }
}

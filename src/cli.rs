//! Command-line flags for `ccopy` and `cpaste`.

use std::path::PathBuf;

use clap::{Args, Parser};
use indoc::indoc;
use tracing::Level;

const COPY_EXAMPLES: &str = indoc! {r#"
    Examples:
      echo "Hello, World!" | ccopy --uppercase
      ccopy --file myfile.txt
"#};

const PASTE_EXAMPLES: &str = indoc! {r#"
    Examples:
      cpaste --trim
      cpaste --file output.txt
"#};

/// Text transformation flags common to both tools.
#[derive(Args, Clone, Debug, Default)]
pub struct TransformArgs {
    /// Remove leading and trailing whitespace.
    #[arg(long)]
    pub trim: bool,

    /// Remove every trailing newline.
    #[arg(long = "no-newline")]
    pub no_newline: bool,

    /// Convert the text to uppercase.
    #[arg(long)]
    pub uppercase: bool,

    /// Convert the text to lowercase. Applied after --uppercase.
    #[arg(long)]
    pub lowercase: bool,

    /// Keep at most N characters. Values of zero or less disable the limit.
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub length: Option<i64>,
}

#[derive(Parser, Debug)]
#[command(
    name = "ccopy",
    version = env!("CARGO_PKG_VERSION"),
    about = "Copy standard input or file contents to the clipboard",
    after_help = COPY_EXAMPLES
)]
pub struct CopyCli {
    #[command(flatten)]
    pub transform: TransformArgs,

    /// Prepend the current clipboard contents instead of replacing them.
    #[arg(long)]
    pub append: bool,

    /// Copy the contents of a file instead of standard input.
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Suppress the confirmation message.
    #[arg(long)]
    pub silent: bool,

    /// Log diagnostics to stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Parser, Debug)]
#[command(
    name = "cpaste",
    version = env!("CARGO_PKG_VERSION"),
    about = "Paste text from the clipboard",
    after_help = PASTE_EXAMPLES
)]
pub struct PasteCli {
    #[command(flatten)]
    pub transform: TransformArgs,

    /// Clear the clipboard after pasting.
    #[arg(long)]
    pub clear: bool,

    /// Write the clipboard contents to a file instead of standard output.
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Treat the clipboard contents as JSON and pretty-print them.
    #[arg(long)]
    pub json: bool,

    /// Log diagnostics to stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CopyCli {
    pub fn log_level(&self) -> Level {
        level_for(self.verbose)
    }
}

impl PasteCli {
    pub fn log_level(&self) -> Level {
        level_for(self.verbose)
    }
}

fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

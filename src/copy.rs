//! The `ccopy` flow: input, transform, optional prepend, clipboard write.

use std::borrow::Cow;
use std::fs;
use std::io::{Read, Write};

use crate::clipboard::{Clipboard, ClipboardError};
use crate::config::{CopyConfig, Source};
use crate::error::ToolError;

pub const CONFIRMATION: &str = "Text copied to clipboard.";

/// What happened to the previous clipboard contents when `--append` is used.
#[derive(Debug)]
pub enum Prepend {
    NotRequested,
    Applied,
    /// The clipboard could not be read; the new text was written on its own.
    Skipped(ClipboardError),
}

#[derive(Debug)]
pub struct CopyOutcome {
    /// Exactly what was written to the clipboard.
    pub text: String,
    pub prepend: Prepend,
}

/// Run the copy flow.
///
/// `stdin` is only read when the configured source is standard input. The
/// confirmation line goes to `out` unless the config is silent; a failure to
/// print it is logged and otherwise ignored, since the clipboard already holds
/// the text by then.
pub fn run<C, R, W>(
    config: &CopyConfig,
    clipboard: &mut C,
    stdin: R,
    out: &mut W,
) -> Result<CopyOutcome, ToolError>
where
    C: Clipboard + ?Sized,
    R: Read,
    W: Write + ?Sized,
{
    let raw = read_source(&config.source, stdin)?;
    let input = decode(&raw);
    let transformed = config.transform.apply(&input);

    let (text, prepend) = if config.append {
        prepend_clipboard(clipboard, transformed)
    } else {
        (transformed, Prepend::NotRequested)
    };

    clipboard
        .write(&text)
        .map_err(ToolError::ClipboardWriteFailed)?;
    tracing::info!(chars = text.chars().count(), "clipboard updated");

    if !config.silent {
        if let Err(err) = writeln!(out, "{CONFIRMATION}") {
            tracing::warn!(%err, "could not print confirmation");
        }
    }

    Ok(CopyOutcome { text, prepend })
}

fn read_source<R: Read>(source: &Source, mut stdin: R) -> Result<Vec<u8>, ToolError> {
    let result = match source {
        Source::File(path) => fs::read(path),
        Source::Stdin => {
            let mut buf = Vec::new();
            stdin.read_to_end(&mut buf).map(|_| buf)
        }
    };
    result.map_err(|err| ToolError::InputUnreadable {
        source_desc: source.clone(),
        err,
    })
}

fn decode(raw: &[u8]) -> Cow<'_, str> {
    let text = String::from_utf8_lossy(raw);
    if let Cow::Owned(_) = text {
        tracing::warn!("input is not valid UTF-8, invalid sequences were replaced");
    }
    text
}

fn prepend_clipboard<C>(clipboard: &mut C, text: String) -> (String, Prepend)
where
    C: Clipboard + ?Sized,
{
    match clipboard.read() {
        Ok(existing) => {
            let mut combined = existing;
            combined.reserve(text.len() + 1);
            combined.push('\n');
            combined.push_str(&text);
            (combined, Prepend::Applied)
        }
        Err(err) => {
            tracing::debug!(%err, "clipboard unreadable, copying without prepend");
            (text, Prepend::Skipped(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::transform::TransformOptions;
    use std::io;
    use std::path::PathBuf;

    fn config() -> CopyConfig {
        CopyConfig {
            source: Source::Stdin,
            transform: TransformOptions::default(),
            append: false,
            silent: false,
        }
    }

    #[test]
    fn copies_transformed_stdin_and_confirms() {
        let mut cb = MemoryClipboard::new();
        let mut out = Vec::new();
        let cfg = CopyConfig {
            transform: TransformOptions {
                trim: true,
                uppercase: true,
                ..TransformOptions::default()
            },
            ..config()
        };
        let outcome = run(&cfg, &mut cb, "  Hello, World!\n".as_bytes(), &mut out).unwrap();
        assert_eq!(cb.contents(), "HELLO, WORLD!");
        assert_eq!(outcome.text, "HELLO, WORLD!");
        assert!(matches!(outcome.prepend, Prepend::NotRequested));
        assert_eq!(out, b"Text copied to clipboard.\n");
    }

    #[test]
    fn append_prepends_existing_contents() {
        let mut cb = MemoryClipboard::with_contents("old");
        let cfg = CopyConfig {
            append: true,
            ..config()
        };
        let outcome = run(&cfg, &mut cb, "new".as_bytes(), &mut io::sink()).unwrap();
        assert_eq!(cb.contents(), "old\nnew");
        assert!(matches!(outcome.prepend, Prepend::Applied));
    }

    #[test]
    fn append_falls_back_when_clipboard_unreadable() {
        let mut cb = MemoryClipboard::with_contents("hidden");
        cb.set_fail_reads(true);
        let cfg = CopyConfig {
            append: true,
            ..config()
        };
        let outcome = run(&cfg, &mut cb, "new".as_bytes(), &mut io::sink()).unwrap();
        assert_eq!(cb.contents(), "new");
        assert!(matches!(outcome.prepend, Prepend::Skipped(_)));
    }

    #[test]
    fn append_to_clipboard_without_text_adds_no_separator() {
        let mut cb = MemoryClipboard::without_text();
        let cfg = CopyConfig {
            append: true,
            ..config()
        };
        let outcome = run(&cfg, &mut cb, "new".as_bytes(), &mut io::sink()).unwrap();
        assert_eq!(cb.contents(), "new");
        assert!(matches!(
            outcome.prepend,
            Prepend::Skipped(ClipboardError::Backend(arboard::Error::ContentNotAvailable))
        ));
    }

    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
        }
    }

    #[test]
    fn stdin_read_error_leaves_clipboard_untouched() {
        let mut cb = MemoryClipboard::with_contents("before");
        let mut out = Vec::new();
        let err = run(&config(), &mut cb, BrokenPipe, &mut out).unwrap_err();
        assert!(matches!(
            err,
            ToolError::InputUnreadable {
                source_desc: Source::Stdin,
                ..
            }
        ));
        assert!(err.to_string().starts_with("Error reading standard input"));
        assert_eq!(cb.writes(), 0);
        assert_eq!(cb.contents(), "before");
        assert!(out.is_empty());
    }

    #[test]
    fn silent_prints_nothing() {
        let mut cb = MemoryClipboard::new();
        let mut out = Vec::new();
        let cfg = CopyConfig {
            silent: true,
            ..config()
        };
        run(&cfg, &mut cb, "x".as_bytes(), &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(cb.contents(), "x");
    }

    #[test]
    fn missing_file_leaves_clipboard_untouched() {
        let mut cb = MemoryClipboard::with_contents("before");
        let cfg = CopyConfig {
            source: Source::File(PathBuf::from("/definitely/not/here.txt")),
            ..config()
        };
        let err = run(&cfg, &mut cb, io::empty(), &mut io::sink()).unwrap_err();
        assert!(matches!(err, ToolError::InputUnreadable { .. }));
        assert!(err.to_string().starts_with("Error reading file"));
        assert_eq!(cb.contents(), "before");
        assert_eq!(cb.writes(), 0);
    }

    #[test]
    fn clipboard_write_failure_is_fatal() {
        let mut cb = MemoryClipboard::unavailable();
        let mut out = Vec::new();
        let err = run(&config(), &mut cb, "text".as_bytes(), &mut out).unwrap_err();
        assert!(matches!(err, ToolError::ClipboardWriteFailed(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut cb = MemoryClipboard::new();
        let input: &[u8] = b"ok\xffok";
        run(&config(), &mut cb, input, &mut io::sink()).unwrap();
        assert_eq!(cb.contents(), "ok\u{fffd}ok");
    }

    #[test]
    fn transform_runs_before_prepend() {
        let mut cb = MemoryClipboard::with_contents("  Keep Me  ");
        let cfg = CopyConfig {
            append: true,
            transform: TransformOptions {
                trim: true,
                lowercase: true,
                max_length: Some(3),
                ..TransformOptions::default()
            },
            ..config()
        };
        run(&cfg, &mut cb, "  NEWER ".as_bytes(), &mut io::sink()).unwrap();
        assert_eq!(cb.contents(), "  Keep Me  \nnew");
    }
}

use std::fmt;
use std::path::PathBuf;

use crate::cli::{CopyCli, PasteCli, TransformArgs};
use crate::transform::TransformOptions;

/// Where `ccopy` reads its input from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("standard input"),
            Source::File(path) => write!(f, "file {}", path.display()),
        }
    }
}

/// Where `cpaste` writes its output to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("standard output"),
            Destination::File(path) => write!(f, "file {}", path.display()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyConfig {
    pub source: Source,
    pub transform: TransformOptions,
    /// Prepend the current clipboard text and a newline before writing.
    pub append: bool,
    pub silent: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasteConfig {
    pub transform: TransformOptions,
    pub json_pretty: bool,
    pub destination: Destination,
    pub clear_after: bool,
}

impl From<&TransformArgs> for TransformOptions {
    fn from(args: &TransformArgs) -> Self {
        Self {
            trim: args.trim,
            uppercase: args.uppercase,
            lowercase: args.lowercase,
            strip_trailing_newline: args.no_newline,
            max_length: args
                .length
                .filter(|&n| n > 0)
                .and_then(|n| usize::try_from(n).ok()),
        }
    }
}

impl From<&CopyCli> for CopyConfig {
    fn from(cli: &CopyCli) -> Self {
        Self {
            source: cli.file.clone().map_or(Source::Stdin, Source::File),
            transform: TransformOptions::from(&cli.transform),
            append: cli.append,
            silent: cli.silent,
        }
    }
}

impl From<&PasteCli> for PasteConfig {
    fn from(cli: &PasteCli) -> Self {
        Self {
            transform: TransformOptions::from(&cli.transform),
            json_pretty: cli.json,
            destination: cli.file.clone().map_or(Destination::Stdout, Destination::File),
            clear_after: cli.clear,
        }
    }
}

use std::io;

use thiserror::Error;

use crate::clipboard::ClipboardError;
use crate::config::{Destination, Source};

/// Fatal errors of the copy and paste flows.
///
/// Each one ends the invocation with a non-zero exit status.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Error reading {source_desc}: {err}")]
    InputUnreadable {
        source_desc: Source,
        #[source]
        err: io::Error,
    },
    #[error("Error reading from clipboard: {0}")]
    ClipboardReadFailed(#[source] ClipboardError),
    #[error("Error writing to clipboard: {0}")]
    ClipboardWriteFailed(#[source] ClipboardError),
    #[error("Error clearing clipboard: {0}")]
    ClipboardClearFailed(#[source] ClipboardError),
    #[error("Error parsing JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Error writing to {destination}: {err}")]
    OutputWriteFailed {
        destination: Destination,
        #[source]
        err: io::Error,
    },
}

//! The `cpaste` flow: clipboard read, transform, optional JSON, output, optional clear.

use std::fs;
use std::io::Write;

use crate::clipboard::Clipboard;
use crate::config::{Destination, PasteConfig};
use crate::error::ToolError;
use crate::json;

/// Run the paste flow and return the text that was written out.
///
/// Nothing reaches the destination unless every earlier stage succeeded. A
/// failed clear is reported after the output has been produced; that output
/// stays in place.
pub fn run<C, W>(config: &PasteConfig, clipboard: &mut C, stdout: &mut W) -> Result<String, ToolError>
where
    C: Clipboard + ?Sized,
    W: Write + ?Sized,
{
    let contents = clipboard.read().map_err(ToolError::ClipboardReadFailed)?;
    let mut text = config.transform.apply(&contents);
    if config.json_pretty {
        text = json::pretty(&text)?;
    }

    write_destination(&config.destination, &text, stdout)?;
    tracing::info!(destination = %config.destination, chars = text.chars().count(), "pasted");

    if config.clear_after {
        clipboard.clear().map_err(ToolError::ClipboardClearFailed)?;
        tracing::debug!("clipboard cleared");
    }

    Ok(text)
}

fn write_destination<W>(destination: &Destination, text: &str, stdout: &mut W) -> Result<(), ToolError>
where
    W: Write + ?Sized,
{
    let result = match destination {
        Destination::File(path) => fs::write(path, text),
        Destination::Stdout => stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush()),
    };
    result.map_err(|err| ToolError::OutputWriteFailed {
        destination: destination.clone(),
        err,
    })
}

//! JSON pretty printing for `cpaste --json`.

use serde_json::Value;

/// Parse `text` as any JSON value and re-serialise it with two-space
/// indentation. Object keys keep the order they were parsed in.
pub fn pretty(text: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    serde_json::to_string_pretty(&value)
}

//! JSON dump of analyzer output.

use crate::error::Result;
use crate::model::DocumentResult;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a page result to JSON.
///
/// With `ignore_line_break`, newlines are removed from every text field
/// first.
pub fn to_json(doc: &DocumentResult, format: JsonFormat, ignore_line_break: bool) -> Result<String> {
    let stripped;
    let doc = if ignore_line_break {
        stripped = doc.without_line_breaks();
        &stripped
    } else {
        doc
    };

    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc)?,
        JsonFormat::Compact => serde_json::to_string(doc)?,
    };
    Ok(json)
}

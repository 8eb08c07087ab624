//! JSON dump of the structured body, for inspecting the intermediate tree.

use crate::error::Result;
use crate::model::{BodyNode, Document};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize structured body nodes to JSON.
pub fn to_json(nodes: &[BodyNode<'_>], format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(nodes)?,
        JsonFormat::Compact => serde_json::to_string(nodes)?,
    };
    Ok(json)
}

/// Structure a document and serialize the result to JSON.
pub fn structure_to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    to_json(&doc.structure(), format)
}

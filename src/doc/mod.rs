//! The rich-text document model.
//!
//! Mirrors the editor's serialized state: a `{"type": "doc", "content": [...]}`
//! envelope holding a tree of typed nodes with optional attributes, children,
//! text, and inline marks.
//!
//! Deserialization is deliberately lenient. The transform downstream is total,
//! so the model absorbs malformed input instead of propagating it: unknown
//! node and mark kinds map to `Other`, a missing or malformed optional field
//! resolves to its default, a non-array `content` reads as empty, and a node
//! that is not a JSON object at all is dropped. The only hard error left is
//! JSON that does not parse.

mod mark;
mod node;

pub use mark::{Mark, MarkAttrs, MarkKind};
pub use node::{NodeAttrs, NodeKind, RichNode};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// A complete rich-text document: the ordered top-level node sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichDoc {
    /// Top-level nodes in document order.
    #[serde(default, deserialize_with = "de::lenient_nodes", skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<RichNode>,
}

impl RichDoc {
    /// Create a document from a node sequence.
    pub fn new(content: Vec<RichNode>) -> Self {
        Self { content }
    }

    /// Build a document from an already-parsed JSON value.
    ///
    /// Structurally invalid top-level input (not an object, `content` not an
    /// array) yields the empty document rather than an error.
    pub fn from_value(value: &Value) -> Self {
        RichDoc::deserialize(value).unwrap_or_default()
    }
}

/// Parse a document from its JSON source.
///
/// JSON syntax errors are reported; structural problems inside a valid JSON
/// value degrade per the leniency rules of this module.
///
/// # Examples
///
/// ```
/// use folio::parse_document;
///
/// let doc = parse_document(r#"{"type":"doc","content":[{"type":"paragraph"}]}"#).unwrap();
/// assert_eq!(doc.content.len(), 1);
/// ```
pub fn parse_document(json: &str) -> Result<RichDoc> {
    let value: Value = serde_json::from_str(json)?;
    Ok(RichDoc::from_value(&value))
}

/// Lenient deserialization helpers.
///
/// Each helper reads the raw JSON value first, then converts with a default
/// fallback, so one malformed field never poisons the surrounding node.
pub(crate) mod de {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::{Mark, RichNode};

    pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(T::deserialize(value).unwrap_or_default())
    }

    pub(crate) fn lenient_nodes<'de, D>(deserializer: D) -> Result<Vec<RichNode>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let Value::Array(items) = value else {
            return Ok(Vec::new());
        };
        Ok(items
            .into_iter()
            .filter_map(|item| RichNode::deserialize(item).ok())
            .collect())
    }

    pub(crate) fn lenient_marks<'de, D>(deserializer: D) -> Result<Vec<Mark>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let Value::Array(items) = value else {
            return Ok(Vec::new());
        };
        Ok(items
            .into_iter()
            .filter_map(|item| Mark::deserialize(item).ok())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_document() {
        let doc = parse_document(
            r#"{"type":"doc","content":[
                {"type":"paragraph","content":[{"type":"text","text":"hi"}]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(doc.content.len(), 1);
        assert_eq!(doc.content[0].kind, NodeKind::Paragraph);
        assert_eq!(doc.content[0].content[0].text, "hi");
    }

    #[test]
    fn unknown_node_kind_maps_to_other() {
        let doc = parse_document(r#"{"content":[{"type":"mathBlock","content":[]}]}"#).unwrap();
        assert_eq!(doc.content[0].kind, NodeKind::Other);
    }

    #[test]
    fn missing_type_maps_to_other() {
        let doc = parse_document(r#"{"content":[{"text":"stray"}]}"#).unwrap();
        assert_eq!(doc.content[0].kind, NodeKind::Other);
        assert_eq!(doc.content[0].text, "stray");
    }

    #[test]
    fn non_array_content_reads_as_empty() {
        let doc = parse_document(r#"{"content":"oops"}"#).unwrap();
        assert!(doc.content.is_empty());
    }

    #[test]
    fn top_level_not_object_reads_as_empty() {
        let doc = parse_document("[1, 2, 3]").unwrap();
        assert!(doc.content.is_empty());
        let doc = parse_document("42").unwrap();
        assert!(doc.content.is_empty());
    }

    #[test]
    fn malformed_attr_resolves_to_default() {
        let doc = parse_document(
            r#"{"content":[{"type":"heading","attrs":{"level":"two"},"content":[]}]}"#,
        )
        .unwrap();
        assert_eq!(doc.content[0].attrs.level, None);
        assert_eq!(doc.content[0].heading_level(), 1);
    }

    #[test]
    fn malformed_attrs_object_resolves_to_default() {
        let doc = parse_document(r#"{"content":[{"type":"paragraph","attrs":17}]}"#).unwrap();
        assert!(doc.content[0].attrs.is_empty());
    }

    #[test]
    fn non_object_nodes_are_dropped() {
        let doc =
            parse_document(r#"{"content":[{"type":"paragraph"},"stray",null,7]}"#).unwrap();
        assert_eq!(doc.content.len(), 1);
    }

    #[test]
    fn syntax_error_is_reported() {
        assert!(parse_document("{not json").is_err());
    }

    #[test]
    fn marks_deserialize_with_attrs() {
        let doc = parse_document(
            r#"{"content":[{"type":"paragraph","content":[
                {"type":"text","text":"x","marks":[
                    {"type":"bold"},
                    {"type":"link","attrs":{"href":"https://example.com"}}
                ]}
            ]}]}"#,
        )
        .unwrap();
        let text = &doc.content[0].content[0];
        assert_eq!(text.marks.len(), 2);
        assert_eq!(text.marks[0].kind, MarkKind::Bold);
        assert_eq!(text.marks[1].attrs.href.as_deref(), Some("https://example.com"));
    }
}

//! Inline formatting marks.

use serde::{Deserialize, Serialize};

use super::de;

/// Kind of an inline formatting mark.
///
/// Marks wrap a text run's escaped output in array order. Unrecognized mark
/// kinds map to [`MarkKind::Other`] and pass the text through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum MarkKind {
    Bold,
    Italic,
    Underline,
    Strike,
    Code,
    /// Hyperlink. Target in `attrs.href`.
    Link,
    /// Highlight. Color in `attrs.color`.
    Highlight,
    Subscript,
    Superscript,
    /// Any unrecognized mark kind. No-op.
    #[default]
    Other,
}

impl MarkKind {
    /// The wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkKind::Bold => "bold",
            MarkKind::Italic => "italic",
            MarkKind::Underline => "underline",
            MarkKind::Strike => "strike",
            MarkKind::Code => "code",
            MarkKind::Link => "link",
            MarkKind::Highlight => "highlight",
            MarkKind::Subscript => "subscript",
            MarkKind::Superscript => "superscript",
            MarkKind::Other => "other",
        }
    }
}

impl From<String> for MarkKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "bold" => MarkKind::Bold,
            "italic" => MarkKind::Italic,
            "underline" => MarkKind::Underline,
            "strike" => MarkKind::Strike,
            "code" => MarkKind::Code,
            "link" => MarkKind::Link,
            "highlight" => MarkKind::Highlight,
            "subscript" => MarkKind::Subscript,
            "superscript" => MarkKind::Superscript,
            _ => MarkKind::Other,
        }
    }
}

impl From<MarkKind> for &'static str {
    fn from(kind: MarkKind) -> &'static str {
        kind.as_str()
    }
}

/// Mark attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAttrs {
    /// Link target. Missing targets render as `"#"`.
    #[serde(default, deserialize_with = "de::lenient", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Highlight color. Missing colors use the default highlight yellow.
    #[serde(default, deserialize_with = "de::lenient", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl MarkAttrs {
    /// True when no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == MarkAttrs::default()
    }
}

/// One inline formatting mark attached to a text node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    /// Mark kind. Unrecognized wire names become [`MarkKind::Other`].
    #[serde(rename = "type", default)]
    pub kind: MarkKind,
    /// Mark-specific attributes.
    #[serde(default, deserialize_with = "de::lenient", skip_serializing_if = "MarkAttrs::is_empty")]
    pub attrs: MarkAttrs,
}

impl Mark {
    /// Create a mark of the given kind with no attributes.
    pub fn new(kind: MarkKind) -> Self {
        Self {
            kind,
            attrs: MarkAttrs::default(),
        }
    }

    /// Create a link mark with the given target.
    pub fn link(href: impl Into<String>) -> Self {
        Self {
            kind: MarkKind::Link,
            attrs: MarkAttrs {
                href: Some(href.into()),
                color: None,
            },
        }
    }

    /// Create a highlight mark with the given color.
    pub fn highlight(color: impl Into<String>) -> Self {
        Self {
            kind: MarkKind::Highlight,
            attrs: MarkAttrs {
                href: None,
                color: Some(color.into()),
            },
        }
    }
}

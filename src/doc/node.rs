//! Document node types and kinds.

use serde::{Deserialize, Serialize};

use super::de;
use super::mark::Mark;

/// Kind of a document node.
///
/// This is the closed vocabulary the renderer and partitioner dispatch on.
/// Node kinds the editor may invent in the future map to [`NodeKind::Other`],
/// which renders as its children with no wrapper, so unknown content degrades
/// to plain markup instead of disappearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum NodeKind {
    /// Leaf text run. Carries `text` and optional `marks`.
    Text,
    /// Block-level text container (`<p>`).
    Paragraph,
    /// Heading with level 1-6 in `attrs.level`.
    Heading,
    /// Unordered list (`<ul>`).
    BulletList,
    /// Ordered list (`<ol>`).
    OrderedList,
    /// Individual list items.
    ListItem,
    /// Checklist container (`<ul data-type="taskList">`).
    TaskList,
    /// Checklist item. Checkbox state in `attrs.checked`.
    TaskItem,
    /// Block quotes.
    Blockquote,
    /// Code block (`<pre><code>`). Child text is taken literally.
    CodeBlock,
    /// Line break (`<br />`). Leaf node.
    HardBreak,
    /// Thematic break (`<hr />`). Leaf node.
    HorizontalRule,
    /// Table structure.
    Table,
    /// Table rows.
    TableRow,
    /// Header cell (`<th>`). Cell styling in `attrs`.
    TableHeader,
    /// Data cell (`<td>`). Cell styling in `attrs`.
    TableCell,
    /// Any unrecognized node kind. Renders children only.
    #[default]
    Other,
}

impl NodeKind {
    /// The wire name of this kind (camelCase, as the editor serializes it).
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Text => "text",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Heading => "heading",
            NodeKind::BulletList => "bulletList",
            NodeKind::OrderedList => "orderedList",
            NodeKind::ListItem => "listItem",
            NodeKind::TaskList => "taskList",
            NodeKind::TaskItem => "taskItem",
            NodeKind::Blockquote => "blockquote",
            NodeKind::CodeBlock => "codeBlock",
            NodeKind::HardBreak => "hardBreak",
            NodeKind::HorizontalRule => "horizontalRule",
            NodeKind::Table => "table",
            NodeKind::TableRow => "tableRow",
            NodeKind::TableHeader => "tableHeader",
            NodeKind::TableCell => "tableCell",
            NodeKind::Other => "other",
        }
    }
}

impl From<String> for NodeKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "text" => NodeKind::Text,
            "paragraph" => NodeKind::Paragraph,
            "heading" => NodeKind::Heading,
            "bulletList" => NodeKind::BulletList,
            "orderedList" => NodeKind::OrderedList,
            "listItem" => NodeKind::ListItem,
            "taskList" => NodeKind::TaskList,
            "taskItem" => NodeKind::TaskItem,
            "blockquote" => NodeKind::Blockquote,
            "codeBlock" => NodeKind::CodeBlock,
            "hardBreak" => NodeKind::HardBreak,
            "horizontalRule" => NodeKind::HorizontalRule,
            "table" => NodeKind::Table,
            "tableRow" => NodeKind::TableRow,
            "tableHeader" => NodeKind::TableHeader,
            "tableCell" => NodeKind::TableCell,
            _ => NodeKind::Other,
        }
    }
}

impl From<NodeKind> for &'static str {
    fn from(kind: NodeKind) -> &'static str {
        kind.as_str()
    }
}

/// Node attributes.
///
/// One bag covers every node kind; each kind reads only the fields it cares
/// about. A malformed value deserializes as absent rather than failing the
/// whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeAttrs {
    /// Heading level (1-6). Missing or malformed means level 1.
    #[serde(default, deserialize_with = "de::lenient", skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    /// Block text alignment. `"left"` is the default and emits no style.
    #[serde(default, deserialize_with = "de::lenient", skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    /// Task item checkbox state.
    #[serde(default, deserialize_with = "de::lenient", skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    /// Table cell background color.
    #[serde(default, deserialize_with = "de::lenient", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Table cell text color.
    #[serde(default, deserialize_with = "de::lenient", skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Table cell vertical alignment. `"top"` is the default.
    #[serde(default, deserialize_with = "de::lenient", skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<String>,
}

impl NodeAttrs {
    /// True when no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == NodeAttrs::default()
    }
}

/// One node in the editor's tree-shaped document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichNode {
    /// Node kind. Unrecognized wire names become [`NodeKind::Other`].
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    /// Node-specific attributes.
    #[serde(default, deserialize_with = "de::lenient", skip_serializing_if = "NodeAttrs::is_empty")]
    pub attrs: NodeAttrs,
    /// Ordered child nodes. Leaf nodes have none.
    #[serde(default, deserialize_with = "de::lenient_nodes", skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<RichNode>,
    /// Raw unformatted text. Only meaningful on text nodes.
    #[serde(default, deserialize_with = "de::lenient", skip_serializing_if = "str::is_empty")]
    pub text: String,
    /// Inline formatting marks, applied in order. Only meaningful on text nodes.
    #[serde(default, deserialize_with = "de::lenient_marks", skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

impl RichNode {
    /// Create a node of the given kind with no attributes or children.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Create a plain text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            text: text.into(),
            ..Self::default()
        }
    }

    /// Heading level, defaulting to 1 when absent.
    pub fn heading_level(&self) -> u8 {
        self.attrs.level.unwrap_or(1)
    }

    /// Concatenated raw text of this node's text descendants, untrimmed.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if self.kind == NodeKind::Text {
            out.push_str(&self.text);
        }
        for child in &self.content {
            child.collect_text(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trip() {
        for name in [
            "text",
            "paragraph",
            "heading",
            "bulletList",
            "taskItem",
            "tableHeader",
        ] {
            let kind = NodeKind::from(name.to_string());
            assert_eq!(kind.as_str(), name);
        }
    }

    #[test]
    fn unknown_kind_is_other() {
        assert_eq!(NodeKind::from("mathBlock".to_string()), NodeKind::Other);
        assert_eq!(NodeKind::from(String::new()), NodeKind::Other);
    }

    #[test]
    fn plain_text_concatenates_descendants() {
        let mut heading = RichNode::new(NodeKind::Heading);
        heading.content.push(RichNode::text("Hello "));
        let mut span = RichNode::new(NodeKind::Other);
        span.content.push(RichNode::text("World"));
        heading.content.push(span);
        assert_eq!(heading.plain_text(), "Hello World");
    }

    #[test]
    fn heading_level_defaults_to_one() {
        let heading = RichNode::new(NodeKind::Heading);
        assert_eq!(heading.heading_level(), 1);
    }
}

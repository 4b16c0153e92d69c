//! Node → HTML fragment rendering.
//!
//! Pure string building, no I/O. [`render_node`] is total and deterministic:
//! it covers every [`NodeKind`], never fails, and degrades to empty output or
//! unwrapped children on anything missing or malformed. The emitted HTML is
//! the trust boundary for user-authored rich text — see [`escape_html`] — and
//! its exact shape is a contract with downstream code that parses structured
//! values back out of it (table cell `data-*` attributes).

mod escape;
mod marks;
mod table;

pub use escape::escape_html;
pub use marks::{apply_marks, DEFAULT_HIGHLIGHT_COLOR, INLINE_CODE_CLASS, LINK_CLASS};
pub use table::{TABLE_CELL_CLASS, TABLE_HEADER_CLASS};

use crate::doc::{NodeKind, RichNode};

/// Render one node (and recursively its children) to an HTML fragment.
///
/// # Examples
///
/// ```
/// use folio::{render_node, NodeKind, RichNode};
///
/// let mut para = RichNode::new(NodeKind::Paragraph);
/// para.content.push(RichNode::text("a < b"));
/// assert_eq!(render_node(&para), "<p>a &lt; b</p>");
/// ```
pub fn render_node(node: &RichNode) -> String {
    match node.kind {
        NodeKind::Text => apply_marks(escape_html(&node.text), &node.marks),

        NodeKind::Paragraph => {
            format!("<p{}>{}</p>", align_style(node), render_children(node))
        }

        NodeKind::Heading => {
            let level = node.heading_level();
            format!(
                "<h{level}{}>{}</h{level}>",
                align_style(node),
                render_children(node)
            )
        }

        NodeKind::BulletList => format!("<ul>{}</ul>", render_children(node)),
        NodeKind::OrderedList => format!("<ol>{}</ol>", render_children(node)),
        NodeKind::ListItem => format!("<li>{}</li>", render_children(node)),

        NodeKind::TaskList => {
            format!("<ul data-type=\"taskList\">{}</ul>", render_children(node))
        }
        NodeKind::TaskItem => {
            let checked = node.attrs.checked.unwrap_or(false);
            let checkbox = if checked {
                "<input type=\"checkbox\" checked disabled />"
            } else {
                "<input type=\"checkbox\" disabled />"
            };
            format!(
                "<li data-checked=\"{checked}\">{checkbox}{}</li>",
                render_children(node)
            )
        }

        NodeKind::Blockquote => format!("<blockquote>{}</blockquote>", render_children(node)),

        NodeKind::CodeBlock => {
            // Marks on code text are ignored; the content is literal.
            format!("<pre><code>{}</code></pre>", escape_html(&node.plain_text()))
        }

        NodeKind::HardBreak => "<br />".to_string(),
        NodeKind::HorizontalRule => "<hr />".to_string(),

        NodeKind::Table => format!("<table>{}</table>", render_children(node)),
        NodeKind::TableRow => format!("<tr>{}</tr>", render_children(node)),
        NodeKind::TableHeader => table::render_cell(node, true),
        NodeKind::TableCell => table::render_cell(node, false),

        // Unknown kinds unwrap to their children so future editor node types
        // degrade to plain markup instead of disappearing.
        NodeKind::Other => render_children(node),
    }
}

/// Render a node's children, concatenated with no separator.
pub fn render_children(node: &RichNode) -> String {
    node.content.iter().map(render_node).collect()
}

/// Inline `style` attribute for aligned blocks; empty at the `left` default.
fn align_style(node: &RichNode) -> String {
    match node.attrs.text_align.as_deref() {
        Some(align) if align != "left" => {
            format!(" style=\"text-align: {}\"", escape_html(align))
        }
        _ => String::new(),
    }
}

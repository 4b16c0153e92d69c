//! Inline mark rendering.
//!
//! Marks wrap the escaped text output in array order: each successive mark
//! wraps the result of the previous one, so `[bold, italic]` nests as
//! `<em><strong>…</strong></em>`. Order affects nesting, not visual
//! semantics, since every mark maps to a distinct wrapper.

use crate::doc::{Mark, MarkKind};

use super::escape::escape_html;

/// Fallback highlight color when the mark carries none.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#fef08a";

/// Fixed classes on inline code spans.
pub const INLINE_CODE_CLASS: &str = "rounded bg-gray-100 px-1.5 py-0.5 font-mono text-sm";

/// Fixed classes on links.
pub const LINK_CLASS: &str = "text-blue-600 underline hover:text-blue-800";

/// Wrap already-escaped text in the markup for each mark, in order.
pub fn apply_marks(escaped: String, marks: &[Mark]) -> String {
    marks.iter().fold(escaped, wrap_mark)
}

fn wrap_mark(inner: String, mark: &Mark) -> String {
    match mark.kind {
        MarkKind::Bold => format!("<strong>{inner}</strong>"),
        MarkKind::Italic => format!("<em>{inner}</em>"),
        MarkKind::Underline => format!("<u>{inner}</u>"),
        MarkKind::Strike => format!("<s>{inner}</s>"),
        MarkKind::Code => format!("<code class=\"{INLINE_CODE_CLASS}\">{inner}</code>"),
        MarkKind::Link => {
            let href = escape_html(mark.attrs.href.as_deref().unwrap_or("#"));
            format!("<a href=\"{href}\" class=\"{LINK_CLASS}\">{inner}</a>")
        }
        MarkKind::Highlight => {
            let color = escape_html(
                mark.attrs
                    .color
                    .as_deref()
                    .unwrap_or(DEFAULT_HIGHLIGHT_COLOR),
            );
            format!("<mark data-color=\"{color}\" style=\"background-color: {color}\">{inner}</mark>")
        }
        MarkKind::Subscript => format!("<sub>{inner}</sub>"),
        MarkKind::Superscript => format!("<sup>{inner}</sup>"),
        MarkKind::Other => inner,
    }
}

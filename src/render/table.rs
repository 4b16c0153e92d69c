//! Table cell rendering.
//!
//! Cells carry their structured styling twice: as an inline `style` for
//! display, and mirrored into `data-background-color` / `data-text-color`
//! attributes so a later parse-back step can recover the original values
//! from the raw HTML. Changing the emitted shape breaks that round trip.

use crate::doc::{NodeAttrs, RichNode};

use super::escape::escape_html;
use super::render_children;

/// Fixed classes on header cells. The default header background comes from
/// this class, never from a synthesized inline style.
pub const TABLE_HEADER_CLASS: &str = "border border-gray-300 bg-gray-100 px-3 py-2 font-semibold";

/// Fixed classes on data cells.
pub const TABLE_CELL_CLASS: &str = "border border-gray-300 px-3 py-2";

pub(super) fn render_cell(node: &RichNode, header: bool) -> String {
    let (tag, class) = if header {
        ("th", TABLE_HEADER_CLASS)
    } else {
        ("td", TABLE_CELL_CLASS)
    };

    let mut attrs = format!(" class=\"{class}\"");

    let style = cell_style(&node.attrs);
    if !style.is_empty() {
        attrs.push_str(&format!(" style=\"{style}\""));
    }
    if let Some(bg) = &node.attrs.background_color {
        attrs.push_str(&format!(" data-background-color=\"{}\"", escape_html(bg)));
    }
    if let Some(color) = &node.attrs.text_color {
        attrs.push_str(&format!(" data-text-color=\"{}\"", escape_html(color)));
    }

    format!("<{tag}{attrs}>{}</{tag}>", render_children(node))
}

/// Build the inline style declarations for a cell, joined by `"; "`.
///
/// Colors get `!important` so they win over the class defaults; alignments
/// are plain and omitted at their `left`/`top` defaults.
fn cell_style(attrs: &NodeAttrs) -> String {
    let mut decls = Vec::new();

    if let Some(bg) = &attrs.background_color {
        decls.push(format!("background-color: {} !important", escape_html(bg)));
    }
    if let Some(color) = &attrs.text_color {
        decls.push(format!("color: {} !important", escape_html(color)));
    }
    if let Some(align) = &attrs.text_align
        && align != "left"
    {
        decls.push(format!("text-align: {}", escape_html(align)));
    }
    if let Some(align) = &attrs.vertical_align
        && align != "top"
    {
        decls.push(format!("vertical-align: {}", escape_html(align)));
    }

    decls.join("; ")
}

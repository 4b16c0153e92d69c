//! # folio
//!
//! A small, pure library that turns rich-text editor documents (the
//! Tiptap/ProseMirror JSON node tree) into sanitized HTML fragments and
//! structured, titled page sections.
//!
//! ## Features
//!
//! - Lenient parsing of the editor's serialized document model
//! - Deterministic node → HTML rendering with strict escaping
//! - Heading-driven partitioning of a document into a titled page with
//!   ordered sections
//!
//! ## Quick Start
//!
//! ```
//! use folio::{parse_document, partition};
//!
//! let doc = parse_document(r#"{
//!     "type": "doc",
//!     "content": [
//!         {"type": "heading", "attrs": {"level": 1},
//!          "content": [{"type": "text", "text": "Getting Started"}]},
//!         {"type": "paragraph",
//!          "content": [{"type": "text", "text": "Welcome to the docs."}]},
//!         {"type": "heading", "attrs": {"level": 2},
//!          "content": [{"type": "text", "text": "Install"}]},
//!         {"type": "paragraph",
//!          "content": [{"type": "text", "text": "Run the installer."}]}
//!     ]
//! }"#).unwrap();
//!
//! let page = partition(&doc, "page-1");
//! assert_eq!(page.title, "Getting Started");
//! assert_eq!(page.sections.len(), 2);
//! assert_eq!(page.sections[1].id, "page-1-install");
//! ```
//!
//! ## Rendering single nodes
//!
//! ```
//! use folio::{render_node, NodeKind, RichNode};
//!
//! let mut para = RichNode::new(NodeKind::Paragraph);
//! para.content.push(RichNode::text("a < b"));
//! assert_eq!(render_node(&para), "<p>a &lt; b</p>");
//! ```
//!
//! Both entry points are pure: no I/O, no shared state, safe to call
//! concurrently. Persistence and access control are the caller's concern.

pub mod doc;
pub mod error;
pub mod page;
pub mod render;

pub use doc::{parse_document, Mark, MarkAttrs, MarkKind, NodeAttrs, NodeKind, RichDoc, RichNode};
pub use error::{Error, Result};
pub use page::{
    partition, partition_with, slugify, DescriptionCapacity, Page, PartitionOptions, Section,
    SectionKind,
};
pub use render::{
    escape_html, render_children, render_node, DEFAULT_HIGHLIGHT_COLOR, INLINE_CODE_CLASS,
    LINK_CLASS, TABLE_CELL_CLASS, TABLE_HEADER_CLASS,
};

//! Page partitioning: document → titled sections.
//!
//! The partitioner walks a document's top-level node sequence once, using the
//! renderer for content nodes, and classifies each node as page title (first
//! H1), section boundary (H2, or any H1 after the first), or content for the
//! current section. Content that precedes the first titled section accumulates
//! as the page's untitled description ("intro") section.

mod partition;
mod slugify;

pub use partition::{partition, partition_with};
pub use slugify::slugify;

use serde::Serialize;

/// How much content the leading description block may hold.
///
/// The upstream behavior diverged here, so the policy is explicit rather
/// than baked in. [`DescriptionCapacity::SingleNode`] is the default: the
/// description holds exactly one rendered fragment, and a second fragment
/// before any heading forces an implicit section break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionCapacity {
    /// The description holds at most one rendered fragment.
    #[default]
    SingleNode,
    /// All content before the first heading belongs to the description.
    Unbounded,
}

/// Options controlling partitioning policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartitionOptions {
    /// Capacity of the leading description block.
    pub description_capacity: DescriptionCapacity,
}

/// Discriminator for stored section content. Only HTML exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    #[default]
    Html,
}

/// A titled-or-untitled contiguous block of rendered content on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Stable id: the page id plus the slugified title, or a positional
    /// fallback (`{pageId}-section-{n}`) when the slug is empty or taken.
    /// The untitled description section is always `{pageId}-intro`.
    pub id: String,
    /// Section title. Empty for the description and anonymous sections.
    pub title: String,
    /// Content discriminator, serialized as `"type"`.
    #[serde(rename = "type")]
    pub kind: SectionKind,
    /// Rendered HTML fragments, one per top-level content node.
    pub content: Vec<String>,
}

/// The output envelope: one page derived from one document.
///
/// `sections` is never empty — an empty document yields one default section
/// so downstream storage always has at least one child record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// Page title from the first H1, or `"Untitled"`.
    pub title: String,
    /// Ordered sections.
    pub sections: Vec<Section>,
}

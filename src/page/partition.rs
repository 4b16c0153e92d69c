//! The section partitioning pass.
//!
//! A single left-to-right fold over the document's top-level nodes. State
//! lives in one accumulator struct consumed node-by-node and finished into
//! an immutable [`Page`], so no partially-built section ever escapes.

use crate::doc::{NodeKind, RichDoc, RichNode};
use crate::render::render_node;

use super::slugify::slugify;
use super::{DescriptionCapacity, Page, PartitionOptions, Section, SectionKind};

/// Partition a document into a page with default options.
///
/// # Examples
///
/// ```
/// use folio::{parse_document, partition};
///
/// let doc = parse_document(r#"{"content":[
///     {"type":"heading","attrs":{"level":1},"content":[{"type":"text","text":"Guide"}]},
///     {"type":"paragraph","content":[{"type":"text","text":"Welcome."}]}
/// ]}"#).unwrap();
///
/// let page = partition(&doc, "p1");
/// assert_eq!(page.title, "Guide");
/// assert_eq!(page.sections[0].id, "p1-intro");
/// ```
pub fn partition(doc: &RichDoc, page_id: &str) -> Page {
    partition_with(doc, page_id, PartitionOptions::default())
}

/// Partition a document into a page.
///
/// Pure and deterministic: the output depends only on the document, the page
/// id (used as the section id prefix), and the options.
pub fn partition_with(doc: &RichDoc, page_id: &str, options: PartitionOptions) -> Page {
    let mut state = Partitioner::new(page_id, options);
    for node in &doc.content {
        state.push(node);
    }
    state.finish()
}

struct Partitioner<'a> {
    page_id: &'a str,
    capacity: DescriptionCapacity,
    title: String,
    saw_title: bool,
    sections: Vec<Section>,
    current: Option<Section>,
    pending_description: Vec<String>,
    collecting_description: bool,
}

impl<'a> Partitioner<'a> {
    fn new(page_id: &'a str, options: PartitionOptions) -> Self {
        Self {
            page_id,
            capacity: options.description_capacity,
            title: "Untitled".to_string(),
            saw_title: false,
            sections: Vec::new(),
            current: None,
            pending_description: Vec::new(),
            // Content before any heading belongs to the description.
            collecting_description: true,
        }
    }

    fn push(&mut self, node: &RichNode) {
        match node.kind {
            // First H1: consumed as the page title, not emitted as content.
            NodeKind::Heading if node.heading_level() == 1 && !self.saw_title => {
                self.saw_title = true;
                let text = node.plain_text();
                let text = text.trim();
                if !text.is_empty() {
                    self.title = text.to_string();
                }
                self.collecting_description = true;
            }

            // H2, or any H1 after the first, opens a new titled section.
            NodeKind::Heading if matches!(node.heading_level(), 1 | 2) => {
                let text = node.plain_text();
                self.open_titled_section(text.trim());
            }

            // Everything else (including H3+) renders as section content.
            _ => {
                let html = render_node(node);
                if html.trim().is_empty() {
                    return;
                }
                self.push_content(html);
            }
        }
    }

    fn finish(mut self) -> Page {
        self.flush_description();
        self.flush_current();

        if self.sections.is_empty() {
            self.sections.push(Section {
                id: format!("{}-section", self.page_id),
                title: String::new(),
                kind: SectionKind::Html,
                content: vec!["<p></p>".to_string()],
            });
        }

        Page {
            title: self.title,
            sections: self.sections,
        }
    }

    fn push_content(&mut self, html: String) {
        if self.collecting_description {
            match self.capacity {
                DescriptionCapacity::Unbounded => self.pending_description.push(html),
                DescriptionCapacity::SingleNode => {
                    if self.pending_description.is_empty() {
                        self.pending_description.push(html);
                    } else {
                        // A second fragment before any heading: finalize the
                        // description and seed an anonymous section with it.
                        self.flush_description();
                        self.current = Some(self.anonymous_section(vec![html]));
                    }
                }
            }
        } else if let Some(current) = &mut self.current {
            current.content.push(html);
        } else {
            self.current = Some(self.anonymous_section(vec![html]));
        }
    }

    fn open_titled_section(&mut self, title: &str) {
        self.flush_description();
        self.flush_current();
        self.current = Some(Section {
            id: self.section_id(title),
            title: title.to_string(),
            kind: SectionKind::Html,
            content: Vec::new(),
        });
    }

    /// End description collection; emit the intro section if any content
    /// accumulated.
    fn flush_description(&mut self) {
        if !self.collecting_description {
            return;
        }
        self.collecting_description = false;
        if self.pending_description.is_empty() {
            return;
        }
        self.sections.push(Section {
            id: format!("{}-intro", self.page_id),
            title: String::new(),
            kind: SectionKind::Html,
            content: std::mem::take(&mut self.pending_description),
        });
    }

    fn flush_current(&mut self) {
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
    }

    /// Id for a titled section: slugified title, or the positional fallback
    /// when the slug is empty or already emitted.
    fn section_id(&self, title: &str) -> String {
        let slug = slugify(title);
        if !slug.is_empty() {
            let id = format!("{}-{}", self.page_id, slug);
            if !self.sections.iter().any(|s| s.id == id) {
                return id;
            }
        }
        format!("{}-section-{}", self.page_id, self.sections.len())
    }

    fn anonymous_section(&self, content: Vec<String>) -> Section {
        Section {
            id: format!("{}-section-{}", self.page_id, self.sections.len()),
            title: String::new(),
            kind: SectionKind::Html,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::NodeAttrs;

    fn heading(level: u8, text: &str) -> RichNode {
        RichNode {
            kind: NodeKind::Heading,
            attrs: NodeAttrs {
                level: Some(level),
                ..NodeAttrs::default()
            },
            content: vec![RichNode::text(text)],
            ..RichNode::default()
        }
    }

    fn paragraph(text: &str) -> RichNode {
        RichNode {
            kind: NodeKind::Paragraph,
            content: vec![RichNode::text(text)],
            ..RichNode::default()
        }
    }

    fn doc(content: Vec<RichNode>) -> RichDoc {
        RichDoc::new(content)
    }

    #[test]
    fn empty_document_gets_default_section() {
        let page = partition(&doc(vec![]), "p1");
        assert_eq!(page.title, "Untitled");
        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].id, "p1-section");
        assert_eq!(page.sections[0].title, "");
        assert_eq!(page.sections[0].content, vec!["<p></p>".to_string()]);
    }

    #[test]
    fn first_h1_becomes_title_not_content() {
        let page = partition(&doc(vec![heading(1, "My Title"), paragraph("Hello")]), "p1");
        assert_eq!(page.title, "My Title");
        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].id, "p1-intro");
        assert_eq!(page.sections[0].title, "");
        assert_eq!(page.sections[0].content, vec!["<p>Hello</p>".to_string()]);
    }

    #[test]
    fn empty_first_h1_leaves_title_untitled() {
        let page = partition(&doc(vec![heading(1, "   "), paragraph("x")]), "p1");
        assert_eq!(page.title, "Untitled");
    }

    #[test]
    fn description_caps_at_one_fragment() {
        let page = partition(
            &doc(vec![heading(1, "T"), paragraph("A"), paragraph("B")]),
            "p1",
        );
        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.sections[0].id, "p1-intro");
        assert_eq!(page.sections[0].content, vec!["<p>A</p>".to_string()]);
        assert_eq!(page.sections[1].title, "");
        assert_eq!(page.sections[1].content, vec!["<p>B</p>".to_string()]);
    }

    #[test]
    fn unbounded_description_keeps_all_leading_content() {
        let options = PartitionOptions {
            description_capacity: DescriptionCapacity::Unbounded,
        };
        let page = partition_with(
            &doc(vec![heading(1, "T"), paragraph("A"), paragraph("B")]),
            "p1",
            options,
        );
        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].id, "p1-intro");
        assert_eq!(
            page.sections[0].content,
            vec!["<p>A</p>".to_string(), "<p>B</p>".to_string()]
        );
    }

    #[test]
    fn h2_opens_titled_section_without_empty_intro() {
        let page = partition(
            &doc(vec![heading(1, "T"), heading(2, "Sec"), paragraph("X")]),
            "p1",
        );
        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].id, "p1-sec");
        assert_eq!(page.sections[0].title, "Sec");
        assert_eq!(page.sections[0].content, vec!["<p>X</p>".to_string()]);
    }

    #[test]
    fn second_h1_acts_as_section_boundary() {
        let page = partition(
            &doc(vec![
                heading(1, "Title"),
                paragraph("desc"),
                heading(1, "Part Two"),
                paragraph("body"),
            ]),
            "p1",
        );
        assert_eq!(page.title, "Title");
        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.sections[0].id, "p1-intro");
        assert_eq!(page.sections[1].id, "p1-part-two");
        assert_eq!(page.sections[1].title, "Part Two");
        assert_eq!(page.sections[1].content, vec!["<p>body</p>".to_string()]);
    }

    #[test]
    fn content_before_any_heading_is_the_intro() {
        let page = partition(&doc(vec![paragraph("lead")]), "p1");
        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].id, "p1-intro");
        assert_eq!(page.sections[0].content, vec!["<p>lead</p>".to_string()]);
    }

    #[test]
    fn empty_slug_headings_get_positional_ids() {
        let page = partition(
            &doc(vec![
                heading(2, "!!!"),
                paragraph("a"),
                heading(2, "!!!"),
                paragraph("b"),
            ]),
            "p1",
        );
        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.sections[0].id, "p1-section-0");
        assert_eq!(page.sections[1].id, "p1-section-1");
    }

    #[test]
    fn duplicate_titles_do_not_collide() {
        let page = partition(
            &doc(vec![
                heading(2, "Setup"),
                paragraph("a"),
                heading(2, "Setup"),
                paragraph("b"),
            ]),
            "p1",
        );
        assert_eq!(page.sections[0].id, "p1-setup");
        assert_eq!(page.sections[1].id, "p1-section-1");
    }

    #[test]
    fn empty_h2_title_is_distinct_from_no_title() {
        let page = partition(&doc(vec![heading(2, ""), paragraph("x")]), "p1");
        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].title, "");
        assert_eq!(page.sections[0].id, "p1-section-0");
    }

    #[test]
    fn h3_is_content_not_boundary() {
        let page = partition(
            &doc(vec![heading(2, "Sec"), heading(3, "Sub"), paragraph("x")]),
            "p1",
        );
        assert_eq!(page.sections.len(), 1);
        assert_eq!(
            page.sections[0].content,
            vec!["<h3>Sub</h3>".to_string(), "<p>x</p>".to_string()]
        );
    }

    #[test]
    fn empty_paragraph_markup_still_counts_as_content() {
        let page = partition(
            &doc(vec![
                heading(1, "T"),
                RichNode::new(NodeKind::Paragraph),
                paragraph("real"),
            ]),
            "p1",
        );
        // "<p></p>" is non-blank markup, so it occupies the description slot.
        assert_eq!(page.sections[0].content, vec!["<p></p>".to_string()]);
        assert_eq!(page.sections[1].content, vec!["<p>real</p>".to_string()]);
    }

    #[test]
    fn whitespace_only_fragments_are_skipped() {
        let page = partition(&doc(vec![RichNode::text("   "), paragraph("real")]), "p1");
        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].content, vec!["<p>real</p>".to_string()]);
    }

    #[test]
    fn third_leading_fragment_appends_to_anonymous_section() {
        let page = partition(
            &doc(vec![paragraph("A"), paragraph("B"), paragraph("C")]),
            "p1",
        );
        // A fills the capped description, B seeds an anonymous section, C
        // appends to it.
        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.sections[0].id, "p1-intro");
        assert_eq!(
            page.sections[1].content,
            vec!["<p>B</p>".to_string(), "<p>C</p>".to_string()]
        );
    }

    #[test]
    fn partition_is_deterministic() {
        let d = doc(vec![
            heading(1, "T"),
            paragraph("A"),
            heading(2, "S"),
            paragraph("B"),
        ]);
        assert_eq!(partition(&d, "p1"), partition(&d, "p1"));
    }
}

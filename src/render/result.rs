//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

use crate::model::{BodyNode, Document, Element, InlineElement, ListGroup, ParagraphHeading};

use super::MarkupRenderer;

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content
    pub content: String,

    /// Name of the dialect that produced the content
    pub format: String,

    /// Conversion statistics
    pub stats: ConversionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, format: impl Into<String>, stats: ConversionStats) -> Self {
        Self {
            content,
            format: format.into(),
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Render a document and collect statistics about its structure.
pub fn render_with_stats(renderer: &dyn MarkupRenderer, doc: &Document) -> RenderResult {
    let content = renderer.render_document(doc);
    let mut stats = ConversionStats::from_document(doc);
    stats.count_text(&doc.plain_text());
    RenderResult::new(content, renderer.name(), stats)
}

/// Statistics collected from a structured document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Number of normal paragraphs
    pub paragraph_count: u32,

    /// Number of headings, titles and subtitles
    pub heading_count: u32,

    /// Number of top-level list groups
    pub list_group_count: u32,

    /// Number of list items
    pub list_item_count: u32,

    /// Number of tables (rendered empty)
    pub table_count: u32,

    /// Number of tables of contents (rendered empty)
    pub toc_count: u32,

    /// Number of horizontal rules and page breaks
    pub horizontal_rule_count: u32,

    /// Number of dropped elements and unsupported inline children
    pub unsupported_count: u32,

    /// Approximate word count of the source text
    pub word_count: u32,

    /// Character count of the source text (excluding whitespace)
    pub char_count: u32,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the structure of a document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();

        stats.unsupported_count += doc
            .body
            .iter()
            .filter(|e| matches!(e, Element::Unsupported { .. }))
            .count() as u32;

        for node in doc.structure() {
            match node {
                BodyNode::Paragraph(para) => {
                    if para.heading == ParagraphHeading::Normal {
                        stats.paragraph_count += 1;
                    } else {
                        stats.heading_count += 1;
                    }
                    stats.count_inline(&para.children);
                }
                BodyNode::ListGroup(group) => {
                    stats.list_group_count += 1;
                    stats.count_list(&group);
                }
                BodyNode::Table(_) => stats.table_count += 1,
                BodyNode::TableOfContents(_) => stats.toc_count += 1,
            }
        }

        stats
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    fn count_list(&mut self, group: &ListGroup<'_>) {
        for (_, item) in group.items() {
            self.list_item_count += 1;
            self.count_inline(&item.children);
        }
    }

    fn count_inline(&mut self, children: &[InlineElement]) {
        for child in children {
            match child {
                InlineElement::Text(_) => {}
                InlineElement::HorizontalRule | InlineElement::PageBreak => {
                    self.horizontal_rule_count += 1
                }
                InlineElement::Unsupported { .. } => self.unsupported_count += 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListItem, Paragraph, Table};
    use crate::render::{MarkdownRenderer, RenderOptions};

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.push(Paragraph::heading("Intro", 1));
        doc.push(Paragraph::with_text("Hello, world! This is a test."));
        doc.push(ListItem::new("one", 0));
        doc.push(ListItem::new("two", 1));
        doc.push(Table::default());
        doc.push(Element::Unsupported {
            kind: "EQUATION".into(),
        });
        let mut rule = Paragraph::new();
        rule.add_horizontal_rule();
        doc.push(rule);
        doc
    }

    #[test]
    fn test_stats_from_document() {
        let stats = ConversionStats::from_document(&sample());

        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.list_group_count, 1);
        assert_eq!(stats.list_item_count, 2);
        assert_eq!(stats.table_count, 1);
        assert_eq!(stats.horizontal_rule_count, 1);
        assert_eq!(stats.unsupported_count, 1);
    }

    #[test]
    fn test_count_text() {
        let mut stats = ConversionStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_render_with_stats() {
        let renderer = MarkdownRenderer::new(RenderOptions::default());
        let result = render_with_stats(&renderer, &sample());

        assert_eq!(result.format, "markdown");
        assert!(result.content.starts_with("# Intro\n"));
        assert_eq!(result.stats.list_item_count, 2);
        assert!(result.stats.word_count >= 8);
        assert_eq!(result.content_len(), result.content.len());
    }
}

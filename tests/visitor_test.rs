//! Integration tests for the visitor pattern.

use wikisync::model::{Document, ListGroup, ListItem, Paragraph, Table, TableOfContents};
use wikisync::render::visitor::{
    CompositeVisitor, DefaultVisitor, DocumentVisitor, SkipEmptyParagraphsVisitor,
    SkipTablesVisitor, VisitorAction,
};
use wikisync::render::{HtmlRenderer, MarkdownRenderer, MarkupRenderer, RenderOptions};

/// Custom visitor that tracks visit counts.
struct CountingVisitor {
    paragraph_count: usize,
    list_item_count: usize,
    table_count: usize,
    heading_count: usize,
}

impl CountingVisitor {
    fn new() -> Self {
        Self {
            paragraph_count: 0,
            list_item_count: 0,
            table_count: 0,
            heading_count: 0,
        }
    }
}

impl DocumentVisitor for CountingVisitor {
    fn visit_paragraph(&mut self, para: &Paragraph) -> VisitorAction {
        if para.is_heading() {
            self.heading_count += 1;
        } else {
            self.paragraph_count += 1;
        }
        VisitorAction::Continue
    }

    fn visit_list_group(&mut self, group: &ListGroup<'_>) -> VisitorAction {
        self.list_item_count += group.item_count();
        VisitorAction::Continue
    }

    fn visit_table(&mut self, _table: &Table) -> VisitorAction {
        self.table_count += 1;
        VisitorAction::Continue
    }
}

/// Replaces every list with a fixed marker.
struct ListPlaceholder;

impl DocumentVisitor for ListPlaceholder {
    fn visit_list_group(&mut self, _group: &ListGroup<'_>) -> VisitorAction {
        VisitorAction::Replace("[list]".to_string())
    }
}

fn sample() -> Document {
    let mut doc = Document::new();
    doc.push(Paragraph::heading("Intro", 1));
    doc.push(Paragraph::with_text("Body"));
    doc.push(Paragraph::with_text("   "));
    doc.push(ListItem::new("A", 0));
    doc.push(ListItem::new("B", 1));
    doc.push(Table::default());
    doc.push(TableOfContents);
    doc
}

#[test]
fn test_default_visitor_all_continue() {
    let mut visitor = DefaultVisitor::new();

    assert!(matches!(
        visitor.visit_paragraph(&Paragraph::new()),
        VisitorAction::Continue
    ));
    assert!(matches!(
        visitor.visit_table(&Table::default()),
        VisitorAction::Continue
    ));
    assert!(matches!(
        visitor.visit_table_of_contents(&TableOfContents),
        VisitorAction::Continue
    ));
}

#[test]
fn test_skip_empty_paragraphs_visitor() {
    let mut visitor = SkipEmptyParagraphsVisitor;

    assert!(visitor.visit_paragraph(&Paragraph::with_text(" ")).should_skip());
    assert!(!visitor
        .visit_paragraph(&Paragraph::with_text("text"))
        .should_skip());
}

#[test]
fn test_counting_visitor_through_render_body() {
    let doc = sample();
    let renderer = HtmlRenderer::new(RenderOptions::default());
    let mut visitor = CountingVisitor::new();

    let with_visitor = renderer.render_body(&doc.structure(), &mut visitor);

    assert_eq!(visitor.heading_count, 1);
    assert_eq!(visitor.paragraph_count, 2);
    assert_eq!(visitor.list_item_count, 2);
    assert_eq!(visitor.table_count, 1);

    // A visitor that always continues changes nothing.
    assert_eq!(with_visitor, renderer.render_document(&doc));
}

#[test]
fn test_skip_tables_removes_separators() {
    let doc = sample();
    let renderer = MarkdownRenderer::new(RenderOptions::default());

    let output = renderer.render_body(&doc.structure(), &mut SkipTablesVisitor);
    assert_eq!(output, "# Intro\n\nBody\n\n   \n\n* A\n  * B\n");

    let full = renderer.render_document(&doc);
    assert_eq!(full, "# Intro\n\nBody\n\n   \n\n* A\n  * B\n\n\n");
}

#[test]
fn test_replace_list() {
    let mut doc = Document::new();
    doc.push(Paragraph::with_text("before"));
    doc.push(ListItem::new("A", 0));
    doc.push(Paragraph::with_text("after"));

    let renderer = MarkdownRenderer::new(RenderOptions::default());
    let output = renderer.render_body(&doc.structure(), &mut ListPlaceholder);
    assert_eq!(output, "before\n\n[list]\nafter\n");
}

#[test]
fn test_composite_visitor_first_decision_wins() {
    let doc = sample();
    let mut visitor = CompositeVisitor::new()
        .with_visitor(SkipEmptyParagraphsVisitor)
        .with_visitor(SkipTablesVisitor)
        .with_visitor(ListPlaceholder);

    let renderer = HtmlRenderer::new(RenderOptions::default());
    let output = renderer.render_body(&doc.structure(), &mut visitor);
    assert_eq!(output, "<h1>Intro</h1>\n\n<p>Body</p>\n\n[list]");
}

#[test]
fn test_skip_empty_keeps_unsupported_children() {
    let doc = wikisync::parse_str(
        r#"{"body": [
            {"type": "paragraph", "children": [{"type": "inline_image"}]},
            {"type": "paragraph", "children": [{"type": "text", "text": " "}]}
        ]}"#,
    )
    .unwrap();

    let renderer = MarkdownRenderer::new(RenderOptions::default());
    let output = renderer.render_body(&doc.structure(), &mut SkipEmptyParagraphsVisitor);
    assert_eq!(output, "Elements of type INLINE_IMAGE are not supported\n");
}

//! The per-dialect renderer trait and the shared tree walk.

use std::borrow::Cow;

use crate::model::{
    flatten_text, BodyNode, Document, InlineElement, ListGroup, ParagraphHeading, RunChild,
    RunNode, RunStyle,
};

use super::visitor::{DefaultVisitor, DocumentVisitor, VisitorAction};

/// A markup dialect.
///
/// Implementors supply the heading table, the list layout, the style
/// wrappers, and the rule marker. The provided methods walk the structured
/// body and call back into them. Rendering is pure: a renderer holds only
/// its options, so the same input always produces the same output.
pub trait MarkupRenderer: Send + Sync {
    /// Registry name of the dialect (e.g. `"html"`).
    fn name(&self) -> &'static str;

    /// MIME type of the output.
    fn mime_type(&self) -> &'static str;

    /// Wrap already rendered paragraph content for its heading kind.
    fn render_paragraph(&self, heading: ParagraphHeading, content: &str) -> String;

    /// Render one list level at tree depth `depth`.
    fn render_list_group(&self, group: &ListGroup<'_>, depth: usize) -> String;

    /// Wrap rendered run content in the markup for `style`.
    fn wrap_run(&self, style: RunStyle<'_>, content: &str) -> String;

    /// Marker emitted for horizontal rules and page breaks.
    fn horizontal_rule(&self) -> &'static str;

    /// Escape a literal text fragment.
    fn escape_text<'t>(&self, text: &'t str) -> Cow<'t, str> {
        Cow::Borrowed(text)
    }

    /// Render a whole document.
    fn render_document(&self, doc: &Document) -> String {
        self.render_body(&doc.structure(), &mut DefaultVisitor)
    }

    /// Render structured nodes, consulting `visitor` before each one.
    ///
    /// Rendered nodes are joined with a single newline. Skipped nodes do not
    /// contribute a separator.
    fn render_body(&self, nodes: &[BodyNode<'_>], visitor: &mut dyn DocumentVisitor) -> String {
        let mut parts = Vec::with_capacity(nodes.len());
        for node in nodes {
            match visit_node(visitor, node) {
                VisitorAction::Continue => parts.push(self.render_node(node)),
                VisitorAction::Replace(content) => parts.push(content),
                VisitorAction::Skip => {}
            }
        }
        parts.join("\n")
    }

    /// Render one top-level node. Tables and tables of contents are empty.
    fn render_node(&self, node: &BodyNode<'_>) -> String {
        match node {
            BodyNode::Paragraph(para) => {
                self.render_paragraph(para.heading, &self.render_inline(&para.children))
            }
            BodyNode::ListGroup(group) => self.render_list(group),
            BodyNode::Table(_) | BodyNode::TableOfContents(_) => String::new(),
        }
    }

    /// Render a top-level list group.
    fn render_list(&self, group: &ListGroup<'_>) -> String {
        self.render_list_group(group, 0)
    }

    /// Render the inline children of a paragraph or list item.
    fn render_inline(&self, children: &[InlineElement]) -> String {
        let mut output = String::new();
        for child in children {
            match child {
                InlineElement::Text(text) => {
                    let runs = flatten_text(text.as_str(), text);
                    output.push_str(&self.render_run(&runs));
                }
                InlineElement::HorizontalRule | InlineElement::PageBreak => {
                    output.push_str(self.horizontal_rule());
                }
                InlineElement::Unsupported { kind } => {
                    output.push_str(&unsupported_inline(kind));
                }
            }
        }
        output
    }

    /// Render a run tree: children first, then at most one wrapper.
    fn render_run(&self, run: &RunNode) -> String {
        let mut content = String::new();
        for child in &run.children {
            match child {
                RunChild::Text(text) => content.push_str(&self.escape_text(text)),
                RunChild::Node(node) => content.push_str(&self.render_run(node)),
            }
        }

        match run.attributes.as_ref().and_then(|attrs| attrs.effective()) {
            Some(style) => self.wrap_run(style, &content),
            None => content,
        }
    }
}

/// Inline placeholder for child kinds no dialect can express.
pub fn unsupported_inline(kind: &str) -> String {
    format!("Elements of type {} are not supported", kind)
}

fn visit_node(visitor: &mut dyn DocumentVisitor, node: &BodyNode<'_>) -> VisitorAction {
    match node {
        BodyNode::Paragraph(para) => visitor.visit_paragraph(para),
        BodyNode::ListGroup(group) => visitor.visit_list_group(group),
        BodyNode::Table(table) => visitor.visit_table(table),
        BodyNode::TableOfContents(toc) => visitor.visit_table_of_contents(toc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, StyleSpan, Text};

    /// Minimal dialect that makes wrapper choices visible.
    struct Tagged;

    impl MarkupRenderer for Tagged {
        fn name(&self) -> &'static str {
            "tagged"
        }

        fn mime_type(&self) -> &'static str {
            "text/plain"
        }

        fn render_paragraph(&self, _heading: ParagraphHeading, content: &str) -> String {
            format!("[{}]", content)
        }

        fn render_list_group(&self, group: &ListGroup<'_>, depth: usize) -> String {
            format!("list:{}@{}", group.item_count(), depth)
        }

        fn wrap_run(&self, style: RunStyle<'_>, content: &str) -> String {
            match style {
                RunStyle::Link(url) => format!("L({})({})", content, url),
                RunStyle::Bold => format!("B({})", content),
                RunStyle::Italic => format!("I({})", content),
                RunStyle::Strikethrough => format!("S({})", content),
            }
        }

        fn horizontal_rule(&self) -> &'static str {
            "--"
        }
    }

    #[test]
    fn test_empty_run_renders_empty() {
        let tagged = Tagged;
        assert_eq!(tagged.render_run(&RunNode::default()), "");
    }

    #[test]
    fn test_one_wrapper_per_run() {
        let tagged = Tagged;
        let text = Text::plain("abc")
            .with_span(StyleSpan::bold(0..3))
            .with_span(StyleSpan::italic(0..3))
            .with_span(StyleSpan::link(2..3, "u"));
        let mut para = Paragraph::new();
        para.add_text(text);

        let out = tagged.render_inline(&para.children);
        assert_eq!(out, "B(ab)L(c)(u)");
    }

    #[test]
    fn test_inline_rules_and_unsupported_children() {
        let tagged = Tagged;
        let children = vec![
            InlineElement::Text(Text::plain("a")),
            InlineElement::PageBreak,
            InlineElement::Unsupported {
                kind: "INLINE_IMAGE".into(),
            },
            InlineElement::HorizontalRule,
        ];
        assert_eq!(
            tagged.render_inline(&children),
            "a--Elements of type INLINE_IMAGE are not supported--"
        );
    }

    #[test]
    fn test_document_join() {
        let tagged = Tagged;
        let mut doc = Document::new();
        doc.push(Paragraph::with_text("one"));
        doc.push(crate::model::Table::default());
        doc.push(Paragraph::with_text("two"));
        assert_eq!(tagged.render_document(&doc), "[one]\n\n[two]");
    }
}

//! Wikitext rendering.
//!
//! Document output is a fixed placeholder until the dialect is finished.
//! The element-level rules below are the agreed subset: list items as
//! `* text`, ranked headings as `#` prefixes, title and subtitle underlined.

use std::borrow::Cow;

use crate::model::{BodyNode, Document, ListGroup, ParagraphHeading, RunStyle};

use super::visitor::DocumentVisitor;
use super::{MarkupRenderer, RenderOptions};

/// Output of every document-level wikitext conversion.
pub const WIKITEXT_PLACEHOLDER: &str = "wikitext is unsupported right now";

/// Convert a document to wikitext (currently always the placeholder).
pub fn to_wikitext(doc: &Document, options: &RenderOptions) -> String {
    WikitextRenderer::new(options.clone()).render_document(doc)
}

/// Wikitext renderer.
#[derive(Debug, Clone, Default)]
pub struct WikitextRenderer {
    options: RenderOptions,
}

impl WikitextRenderer {
    /// Create a new wikitext renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn collect_items(&self, group: &ListGroup<'_>, lines: &mut Vec<String>) {
        for (_, item) in group.items() {
            lines.push(format!("* {}", self.render_inline(&item.children)));
        }
    }
}

impl MarkupRenderer for WikitextRenderer {
    fn name(&self) -> &'static str {
        "wikitext"
    }

    fn mime_type(&self) -> &'static str {
        "text/x-wiki"
    }

    fn render_body(&self, nodes: &[BodyNode<'_>], _visitor: &mut dyn DocumentVisitor) -> String {
        log::debug!(
            "Wikitext output is a placeholder; ignoring {} nodes",
            nodes.len()
        );
        WIKITEXT_PLACEHOLDER.to_string()
    }

    fn render_paragraph(&self, heading: ParagraphHeading, content: &str) -> String {
        match heading {
            ParagraphHeading::Normal => content.to_string(),
            ParagraphHeading::Heading1
            | ParagraphHeading::Heading2
            | ParagraphHeading::Heading3
            | ParagraphHeading::Heading4
            | ParagraphHeading::Heading5
            | ParagraphHeading::Heading6 => {
                let level = heading.level().unwrap_or(1) as usize;
                format!("{} {}", "#".repeat(level), content)
            }
            ParagraphHeading::Title => format!("{}\n======\n", content),
            ParagraphHeading::Subtitle => format!("{}\n------\n", content),
        }
    }

    // Nesting is not part of the agreed rules: every item is one `* ` line.
    fn render_list_group(&self, group: &ListGroup<'_>, _depth: usize) -> String {
        let mut lines = Vec::with_capacity(group.item_count());
        self.collect_items(group, &mut lines);
        lines.join("\n")
    }

    fn wrap_run(&self, _style: RunStyle<'_>, content: &str) -> String {
        content.to_string()
    }

    fn horizontal_rule(&self) -> &'static str {
        ""
    }

    fn escape_text<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.options.escape_text {
            escape_wikitext(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Wrap a fragment holding wiki markup characters in `<nowiki>`.
fn escape_wikitext(text: &str) -> Cow<'_, str> {
    const SPECIAL: [char; 11] = ['\'', '[', ']', '{', '}', '|', '<', '>', '=', '*', '#'];
    if text.contains(SPECIAL) {
        Cow::Owned(format!("<nowiki>{}</nowiki>", text))
    } else {
        Cow::Borrowed(text)
    }
}

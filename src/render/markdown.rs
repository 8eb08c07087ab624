//! Markdown rendering.

use std::borrow::Cow;

use crate::model::{Document, ListEntry, ListGroup, ParagraphHeading, RunStyle};

use super::{MarkupRenderer, RenderOptions};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> String {
    MarkdownRenderer::new(options.clone()).render_document(doc)
}

/// Markdown renderer.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn render_list_into(&self, output: &mut String, group: &ListGroup<'_>, depth: usize) {
        for entry in &group.children {
            match entry {
                ListEntry::Item(item) => {
                    for _ in 0..depth {
                        output.push_str(&self.options.indent);
                    }
                    output.push(self.options.list_marker);
                    output.push(' ');
                    output.push_str(&self.render_inline(&item.children));
                    output.push('\n');
                }
                ListEntry::Group(inner) => self.render_list_into(output, inner, depth + 1),
            }
        }
    }
}

impl MarkupRenderer for MarkdownRenderer {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn mime_type(&self) -> &'static str {
        "text/markdown"
    }

    fn render_paragraph(&self, heading: ParagraphHeading, content: &str) -> String {
        match heading {
            ParagraphHeading::Normal => format!("{}\n", content),
            ParagraphHeading::Heading1
            | ParagraphHeading::Heading2
            | ParagraphHeading::Heading3
            | ParagraphHeading::Heading4
            | ParagraphHeading::Heading5
            | ParagraphHeading::Heading6 => {
                let level = heading.level().unwrap_or(1) as usize;
                format!("{} {}\n", "#".repeat(level), content)
            }
            ParagraphHeading::Title => underline(content, '='),
            ParagraphHeading::Subtitle => underline(content, '-'),
        }
    }

    fn render_list_group(&self, group: &ListGroup<'_>, depth: usize) -> String {
        let mut output = String::new();
        self.render_list_into(&mut output, group, depth);
        output
    }

    fn wrap_run(&self, style: RunStyle<'_>, content: &str) -> String {
        match style {
            RunStyle::Link(url) => format!("[{}]({})", content, url),
            RunStyle::Bold => format!("**{}**", content),
            RunStyle::Italic => format!("*{}*", content),
            RunStyle::Strikethrough => format!("~~{}~~", content),
        }
    }

    fn horizontal_rule(&self) -> &'static str {
        "\n\n"
    }

    fn escape_text<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.options.escape_text {
            escape_markdown(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Setext heading: the text, then one marker per character on the next line.
/// Line breaks inside the text are kept so the underline lines up.
fn underline(content: &str, marker: char) -> String {
    let rule: String = content
        .chars()
        .map(|c| if c == '\n' || c == '\r' { c } else { marker })
        .collect();
    format!("{}\n{}\n", content, rule)
}

/// Escape characters that could be misinterpreted as Markdown syntax.
fn escape_markdown(text: &str) -> Cow<'_, str> {
    const SPECIAL: [char; 7] = ['\\', '`', '*', '_', '[', ']', '~'];
    if !text.contains(SPECIAL) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        if SPECIAL.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListItem, Paragraph, RunNode, Text};

    fn render(doc: &Document) -> String {
        to_markdown(doc, &RenderOptions::default())
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("Hello *world*"), "Hello \\*world\\*");
        assert_eq!(escape_markdown("[link]"), "\\[link\\]");
        assert!(matches!(escape_markdown("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_bold_paragraph() {
        let mut doc = Document::new();
        let mut para = Paragraph::new();
        para.add_text(Text::bold("Hello"));
        doc.push(para);

        assert_eq!(render(&doc), "**Hello**\n");
    }

    #[test]
    fn test_headings() {
        let mut doc = Document::new();
        doc.push(Paragraph::heading("Title", 1));
        assert_eq!(render(&doc), "# Title\n");

        let mut doc = Document::new();
        doc.push(Paragraph::heading("Deep", 6));
        assert_eq!(render(&doc), "###### Deep\n");
    }

    #[test]
    fn test_title_and_subtitle_underline() {
        let mut doc = Document::new();
        doc.push(Paragraph::with_heading(ParagraphHeading::Title, "Report"));
        assert_eq!(render(&doc), "Report\n======\n");

        let mut doc = Document::new();
        doc.push(Paragraph::with_heading(ParagraphHeading::Subtitle, "Q3"));
        assert_eq!(render(&doc), "Q3\n--\n");
    }

    #[test]
    fn test_nested_list() {
        let mut doc = Document::new();
        doc.push(ListItem::new("A", 0));
        doc.push(ListItem::new("B", 1));
        doc.push(ListItem::new("C", 2));
        doc.push(ListItem::new("D", 0));

        assert_eq!(render(&doc), "* A\n  * B\n    * C\n* D\n");
    }

    #[test]
    fn test_list_followed_by_paragraph() {
        let mut doc = Document::new();
        doc.push(ListItem::new("A", 0));
        doc.push(Paragraph::with_text("after"));

        assert_eq!(render(&doc), "* A\n\nafter\n");
    }

    #[test]
    fn test_inline_styles() {
        let mut para = Paragraph::new();
        para.add_text(Text::link("site", "https://example.com"));
        para.add_text(Text::plain(" "));
        para.add_text(Text::italic("it"));
        para.add_text(Text::plain(" "));
        para.add_text(Text::strikethrough("gone"));
        let mut doc = Document::new();
        doc.push(para);

        assert_eq!(
            render(&doc),
            "[site](https://example.com) *it* ~~gone~~\n"
        );
    }

    #[test]
    fn test_page_break_is_blank_line() {
        let mut para = Paragraph::with_text("a");
        para.add_page_break();
        para.add_text(Text::plain("b"));
        let mut doc = Document::new();
        doc.push(para);

        assert_eq!(render(&doc), "a\n\nb\n");
    }

    #[test]
    fn test_custom_list_marker() {
        let mut doc = Document::new();
        doc.push(ListItem::new("A", 0));
        doc.push(ListItem::new("B", 1));

        let options = RenderOptions::new()
            .with_list_marker('-')
            .with_indent_width(4);
        assert_eq!(to_markdown(&doc, &options), "- A\n    - B\n");
    }

    #[test]
    fn test_empty_run_renders_empty() {
        let renderer = MarkdownRenderer::default();
        assert_eq!(renderer.render_run(&RunNode::default()), "");
    }
}

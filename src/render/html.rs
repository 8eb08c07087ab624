//! HTML rendering.
//!
//! Produces a fragment (no `<html>` or `<body>` wrapper).

use std::borrow::Cow;

use crate::model::{Document, ListEntry, ListGroup, ParagraphHeading, RunStyle};

use super::{MarkupRenderer, RenderOptions};

/// Convert a document to an HTML fragment.
pub fn to_html(doc: &Document, options: &RenderOptions) -> String {
    HtmlRenderer::new(options.clone()).render_document(doc)
}

/// HTML renderer.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

/// Opening and closing tags for each heading kind.
fn html_tags(heading: ParagraphHeading) -> (&'static str, &'static str) {
    match heading {
        ParagraphHeading::Normal => ("<p>", "</p>\n"),
        ParagraphHeading::Heading1 => ("<h1>", "</h1>\n"),
        ParagraphHeading::Heading2 => ("<h2>", "</h2>\n"),
        ParagraphHeading::Heading3 => ("<h3>", "</h3>\n"),
        ParagraphHeading::Heading4 => ("<h4>", "</h4>\n"),
        ParagraphHeading::Heading5 => ("<h5>", "</h5>\n"),
        ParagraphHeading::Heading6 => ("<h6>", "</h6>\n"),
        ParagraphHeading::Title => ("<div class=\"title\">", "</div>\n"),
        ParagraphHeading::Subtitle => ("<div class=\"subtitle\">", "</div>\n"),
    }
}

impl MarkupRenderer for HtmlRenderer {
    fn name(&self) -> &'static str {
        "html"
    }

    fn mime_type(&self) -> &'static str {
        "text/html"
    }

    fn render_paragraph(&self, heading: ParagraphHeading, content: &str) -> String {
        let (open, close) = html_tags(heading);
        format!("{}{}{}", open, content, close)
    }

    fn render_list(&self, group: &ListGroup<'_>) -> String {
        let mut output = self.render_list_group(group, 0);
        output.push('\n');
        output
    }

    fn render_list_group(&self, group: &ListGroup<'_>, depth: usize) -> String {
        let indent = self.options.indent.repeat(depth);
        let mut output = format!("{}<ul>\n", indent);

        for entry in &group.children {
            match entry {
                ListEntry::Item(item) => {
                    output.push_str(&indent);
                    output.push_str(&self.options.indent);
                    output.push_str("<li>");
                    output.push_str(&self.render_inline(&item.children));
                    output.push_str("</li>\n");
                }
                ListEntry::Group(inner) => {
                    output.push_str(&self.render_list_group(inner, depth + 1));
                    output.push('\n');
                }
            }
        }

        output.push_str(&indent);
        output.push_str("</ul>");
        output
    }

    fn wrap_run(&self, style: RunStyle<'_>, content: &str) -> String {
        match style {
            RunStyle::Link(url) => format!("<a href=\"{}\">{}</a>", self.escape_text(url), content),
            RunStyle::Bold => format!("<b>{}</b>", content),
            RunStyle::Italic => format!("<i>{}</i>", content),
            RunStyle::Strikethrough => format!("<strike>{}</strike>", content),
        }
    }

    fn horizontal_rule(&self) -> &'static str {
        "<hr/>"
    }

    fn escape_text<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.options.escape_text {
            escape_html(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Escape the characters HTML treats specially in text and attributes.
fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

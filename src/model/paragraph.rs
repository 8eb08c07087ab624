//! Paragraph-level types.

use serde::{Deserialize, Serialize};

use super::Text;

/// Structural role of a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParagraphHeading {
    /// Normal body text
    #[default]
    Normal,
    /// Heading rank 1
    Heading1,
    /// Heading rank 2
    Heading2,
    /// Heading rank 3
    Heading3,
    /// Heading rank 4
    Heading4,
    /// Heading rank 5
    Heading5,
    /// Heading rank 6
    Heading6,
    /// Document title
    Title,
    /// Document subtitle
    Subtitle,
}

impl ParagraphHeading {
    /// Heading for a rank between 1 and 6 (clamped).
    pub fn from_level(level: u8) -> Self {
        match level.clamp(1, 6) {
            1 => Self::Heading1,
            2 => Self::Heading2,
            3 => Self::Heading3,
            4 => Self::Heading4,
            5 => Self::Heading5,
            _ => Self::Heading6,
        }
    }

    /// Heading rank (1-6), or `None` for normal text, title and subtitle.
    pub fn level(self) -> Option<u8> {
        match self {
            Self::Heading1 => Some(1),
            Self::Heading2 => Some(2),
            Self::Heading3 => Some(3),
            Self::Heading4 => Some(4),
            Self::Heading5 => Some(5),
            Self::Heading6 => Some(6),
            Self::Normal | Self::Title | Self::Subtitle => None,
        }
    }

    /// Parse the host's spelling (`HEADING1`, `heading1`, `Title`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        let heading = match s.trim().to_ascii_uppercase().as_str() {
            "NORMAL" => Self::Normal,
            "HEADING1" => Self::Heading1,
            "HEADING2" => Self::Heading2,
            "HEADING3" => Self::Heading3,
            "HEADING4" => Self::Heading4,
            "HEADING5" => Self::Heading5,
            "HEADING6" => Self::Heading6,
            "TITLE" => Self::Title,
            "SUBTITLE" => Self::Subtitle,
            _ => return None,
        };
        Some(heading)
    }
}

/// Content that can appear inside a paragraph or list item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineElement {
    /// A text run with per-character styling
    Text(Text),

    /// A horizontal rule
    HorizontalRule,

    /// A page break
    PageBreak,

    /// Any child kind the renderers cannot express
    Unsupported {
        /// Host kind tag, e.g. `INLINE_IMAGE`
        kind: String,
    },
}

/// A paragraph of content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Structural role
    pub heading: ParagraphHeading,

    /// Inline children in document order
    pub children: Vec<InlineElement>,
}

impl Paragraph {
    /// Create a new empty normal paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normal paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(Text::plain(text));
        p
    }

    /// Create a paragraph with the given heading kind and plain text.
    pub fn with_heading(heading: ParagraphHeading, text: impl Into<String>) -> Self {
        let mut p = Self::with_text(text);
        p.heading = heading;
        p
    }

    /// Create a heading paragraph of rank 1-6.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self::with_heading(ParagraphHeading::from_level(level), text)
    }

    /// Append a text run.
    pub fn add_text(&mut self, text: Text) {
        self.children.push(InlineElement::Text(text));
    }

    /// Append a horizontal rule.
    pub fn add_horizontal_rule(&mut self) {
        self.children.push(InlineElement::HorizontalRule);
    }

    /// Append a page break.
    pub fn add_page_break(&mut self) {
        self.children.push(InlineElement::PageBreak);
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        plain_text(&self.children)
    }

    /// Check if the paragraph has no visible content.
    ///
    /// Only blank text is empty. Rules, page breaks, and unsupported
    /// children all render something.
    pub fn is_empty(&self) -> bool {
        self.children.iter().all(|c| match c {
            InlineElement::Text(text) => text.as_str().trim().is_empty(),
            InlineElement::HorizontalRule
            | InlineElement::PageBreak
            | InlineElement::Unsupported { .. } => false,
        })
    }

    /// Check if this is a ranked heading.
    pub fn is_heading(&self) -> bool {
        self.heading.level().is_some()
    }
}

/// A list item: a paragraph with a nesting level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Zero-based indentation depth reported by the host
    pub nesting_level: u32,

    /// Inline children in document order
    pub children: Vec<InlineElement>,
}

impl ListItem {
    /// Create a list item with plain text.
    pub fn new(text: impl Into<String>, nesting_level: u32) -> Self {
        Self::with_text(Text::plain(text), nesting_level)
    }

    /// Create a list item holding a styled text run.
    pub fn with_text(text: Text, nesting_level: u32) -> Self {
        Self {
            nesting_level,
            children: vec![InlineElement::Text(text)],
        }
    }

    /// Get plain text content of the item.
    pub fn plain_text(&self) -> String {
        plain_text(&self.children)
    }
}

/// A table. Its content is never rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Number of rows reported by the host
    pub rows: usize,
}

/// A table of contents. Its content is never rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOfContents;

fn plain_text(children: &[InlineElement]) -> String {
    children
        .iter()
        .map(|c| match c {
            InlineElement::Text(text) => text.as_str(),
            InlineElement::HorizontalRule | InlineElement::PageBreak => "\n",
            InlineElement::Unsupported { .. } => "",
        })
        .collect()
}

//! Text runs with character-level, possibly overlapping styling.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Per-character style queries, as exposed by the host document.
///
/// Indices count Unicode scalar values, not bytes.
pub trait CharacterStyles {
    /// Whether the character at `index` is bold.
    fn is_bold(&self, index: usize) -> bool;

    /// Whether the character at `index` is italic.
    fn is_italic(&self, index: usize) -> bool;

    /// Whether the character at `index` is struck through.
    fn is_strikethrough(&self, index: usize) -> bool;

    /// Link target of the character at `index`, if any.
    fn link_url(&self, index: usize) -> Option<&str>;
}

/// A text run: a string plus style spans that may overlap freely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// The text content
    pub text: String,

    /// Style spans over character offsets
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<StyleSpan>,
}

impl Text {
    /// Create an unstyled text run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            styles: Vec::new(),
        }
    }

    /// Create a text run that is bold over its whole length.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::whole(text, |span| span.bold = true)
    }

    /// Create a text run that is italic over its whole length.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::whole(text, |span| span.italic = true)
    }

    /// Create a text run that is struck through over its whole length.
    pub fn strikethrough(text: impl Into<String>) -> Self {
        Self::whole(text, |span| span.strikethrough = true)
    }

    /// Create a text run that links to `url` over its whole length.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        Self::whole(text, move |span| span.link = Some(url))
    }

    /// Add a style span.
    pub fn with_span(mut self, span: StyleSpan) -> Self {
        self.styles.push(span);
        self
    }

    /// The text content.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn whole(text: impl Into<String>, apply: impl FnOnce(&mut StyleSpan)) -> Self {
        let text = text.into();
        let mut span = StyleSpan::new(0..text.chars().count());
        apply(&mut span);
        Self {
            text,
            styles: vec![span],
        }
    }

    fn covering(&self, index: usize) -> impl Iterator<Item = &StyleSpan> {
        self.styles.iter().filter(move |span| span.covers(index))
    }
}

impl CharacterStyles for Text {
    fn is_bold(&self, index: usize) -> bool {
        self.covering(index).any(|span| span.bold)
    }

    fn is_italic(&self, index: usize) -> bool {
        self.covering(index).any(|span| span.italic)
    }

    fn is_strikethrough(&self, index: usize) -> bool {
        self.covering(index).any(|span| span.strikethrough)
    }

    // Later spans override earlier ones.
    fn link_url(&self, index: usize) -> Option<&str> {
        self.covering(index)
            .filter_map(|span| span.link.as_deref())
            .last()
    }
}

/// Styling applied to a half-open range of character offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSpan {
    /// First character offset (inclusive)
    pub start: usize,

    /// Last character offset (exclusive)
    pub end: usize,

    /// Bold text
    #[serde(default)]
    pub bold: bool,

    /// Italic text
    #[serde(default)]
    pub italic: bool,

    /// Strikethrough text
    #[serde(default)]
    pub strikethrough: bool,

    /// Link URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl StyleSpan {
    /// Create an unstyled span over `range`.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
            ..Default::default()
        }
    }

    /// Bold span over `range`.
    pub fn bold(range: Range<usize>) -> Self {
        Self {
            bold: true,
            ..Self::new(range)
        }
    }

    /// Italic span over `range`.
    pub fn italic(range: Range<usize>) -> Self {
        Self {
            italic: true,
            ..Self::new(range)
        }
    }

    /// Strikethrough span over `range`.
    pub fn strikethrough(range: Range<usize>) -> Self {
        Self {
            strikethrough: true,
            ..Self::new(range)
        }
    }

    /// Link span over `range`.
    pub fn link(range: Range<usize>, url: impl Into<String>) -> Self {
        Self {
            link: Some(url.into()),
            ..Self::new(range)
        }
    }

    /// Check if the span covers a character offset.
    pub fn covers(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_has_no_styles() {
        let text = Text::plain("hello");
        assert!(!text.is_bold(0));
        assert!(!text.is_italic(4));
        assert_eq!(text.link_url(2), None);
    }

    #[test]
    fn test_whole_run_styles() {
        let text = Text::bold("héllo");
        assert_eq!(text.char_count(), 5);
        assert!(text.is_bold(0));
        assert!(text.is_bold(4));
        assert!(!text.is_bold(5));
    }

    #[test]
    fn test_overlapping_spans() {
        let text = Text::plain("abcdef")
            .with_span(StyleSpan::bold(0..4))
            .with_span(StyleSpan::italic(2..6));
        assert!(text.is_bold(3) && text.is_italic(3));
        assert!(!text.is_italic(1));
        assert!(!text.is_bold(5));
    }

    #[test]
    fn test_later_link_wins() {
        let text = Text::plain("abc")
            .with_span(StyleSpan::link(0..3, "https://a.example"))
            .with_span(StyleSpan::link(1..2, "https://b.example"));
        assert_eq!(text.link_url(0), Some("https://a.example"));
        assert_eq!(text.link_url(1), Some("https://b.example"));
    }
}

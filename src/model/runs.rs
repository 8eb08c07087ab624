//! Run trees: character styling flattened into non-overlapping runs.
//!
//! A host text run may carry overlapping bold/italic/strike/link spans.
//! None of the target dialects are rendered with nested styling, so each
//! character is reduced to a single effective attribute and adjacent
//! characters with the same attribute are merged into one run:
//!
//! ```text
//! "Some bold text" with "bold" in bold
//!
//! RunNode { attributes: None, children: [
//!     RunNode { attributes: None,       children: ["Some "] },
//!     RunNode { attributes: Some(bold), children: ["bold"] },
//!     RunNode { attributes: None,       children: [" text"] },
//! ] }
//! ```

use serde::{Deserialize, Serialize};

use super::CharacterStyles;

/// Font weight of regular text.
pub const NORMAL_WEIGHT: u16 = 400;

/// Font weight used for bold text.
pub const BOLD_WEIGHT: u16 = 700;

/// Simplified style of a run.
///
/// Built by [`style_at`] with at most one field set. Renderers still test the
/// fields in priority order (link, bold, italic, strikethrough) and apply only
/// the first that holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleAttributes {
    /// Link URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Font weight; bold when above [`NORMAL_WEIGHT`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,

    /// Italic text
    #[serde(default)]
    pub italic: bool,

    /// Strikethrough text
    #[serde(default)]
    pub strikethrough: bool,
}

impl StyleAttributes {
    /// Link style.
    pub fn link(url: impl Into<String>) -> Self {
        Self {
            link: Some(url.into()),
            ..Default::default()
        }
    }

    /// Bold style.
    pub fn bold() -> Self {
        Self {
            weight: Some(BOLD_WEIGHT),
            ..Default::default()
        }
    }

    /// Italic style.
    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Default::default()
        }
    }

    /// Strikethrough style.
    pub fn strikethrough() -> Self {
        Self {
            strikethrough: true,
            ..Default::default()
        }
    }

    /// Check if the weight counts as bold.
    pub fn is_bold(&self) -> bool {
        self.weight.is_some_and(|w| w > NORMAL_WEIGHT)
    }

    /// The single wrapper a renderer applies, first match wins.
    pub fn effective(&self) -> Option<RunStyle<'_>> {
        if let Some(ref url) = self.link {
            return Some(RunStyle::Link(url));
        }
        if self.is_bold() {
            return Some(RunStyle::Bold);
        }
        if self.italic {
            return Some(RunStyle::Italic);
        }
        if self.strikethrough {
            return Some(RunStyle::Strikethrough);
        }
        None
    }
}

/// The effective wrapper of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStyle<'a> {
    /// Hyperlink to the URL
    Link(&'a str),
    /// Bold
    Bold,
    /// Italic
    Italic,
    /// Strikethrough
    Strikethrough,
}

/// A node of a run tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunNode {
    /// Style of this node, `None` for unstyled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<StyleAttributes>,

    /// Children in order
    pub children: Vec<RunChild>,
}

/// A child of a [`RunNode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RunChild {
    /// Literal text
    Text(String),
    /// Nested run
    Node(RunNode),
}

impl RunNode {
    /// Create a leaf run holding one text fragment.
    pub fn leaf(attributes: Option<StyleAttributes>, text: impl Into<String>) -> Self {
        Self {
            attributes,
            children: vec![RunChild::Text(text.into())],
        }
    }

    /// Check if the node has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes whose children are only text.
    pub fn leaf_count(&self) -> usize {
        let mut nested = 0;
        let mut has_text = false;
        for child in &self.children {
            match child {
                RunChild::Text(_) => has_text = true,
                RunChild::Node(node) => nested += node.leaf_count(),
            }
        }
        if nested == 0 && has_text {
            1
        } else {
            nested
        }
    }

    /// Concatenated text of all descendants.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                RunChild::Text(text) => out.push_str(text),
                RunChild::Node(node) => node.collect_text(out),
            }
        }
    }
}

/// Reduce the styling of one character to a single attribute.
///
/// Checked in order: link, bold, italic, strikethrough. Returns `None` for
/// unstyled characters.
pub fn style_at<S: CharacterStyles + ?Sized>(source: &S, index: usize) -> Option<StyleAttributes> {
    if let Some(url) = source.link_url(index) {
        return Some(StyleAttributes::link(url));
    }
    if source.is_bold(index) {
        return Some(StyleAttributes::bold());
    }
    if source.is_italic(index) {
        return Some(StyleAttributes::italic());
    }
    if source.is_strikethrough(index) {
        return Some(StyleAttributes::strikethrough());
    }
    None
}

/// Merge per-character styles into a flat sequence of runs.
///
/// `style_at` is called once per character index, in order. The result is an
/// unstyled root whose children are one leaf per maximal equal-style run.
pub fn flatten<F>(text: &str, mut style_at: F) -> RunNode
where
    F: FnMut(usize) -> Option<StyleAttributes>,
{
    if text.is_empty() {
        return RunNode::default();
    }

    let mut runs: Vec<(Option<StyleAttributes>, String)> = Vec::new();
    for (index, ch) in text.chars().enumerate() {
        let style = style_at(index);
        match runs.last_mut() {
            Some((last, fragment)) if *last == style => fragment.push(ch),
            _ => runs.push((style, ch.to_string())),
        }
    }

    RunNode {
        attributes: None,
        children: runs
            .into_iter()
            .map(|(attributes, fragment)| RunChild::Node(RunNode::leaf(attributes, fragment)))
            .collect(),
    }
}

/// Flatten a host text run using its own character styles.
pub fn flatten_text<S: CharacterStyles + ?Sized>(text: &str, source: &S) -> RunNode {
    flatten(text, |index| style_at(source, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StyleSpan, Text};

    fn run_lengths(styles: &[Option<StyleAttributes>]) -> usize {
        let mut count = 0;
        for (i, style) in styles.iter().enumerate() {
            if i == 0 || styles[i - 1] != *style {
                count += 1;
            }
        }
        count
    }

    #[test]
    fn test_empty_text_yields_empty_tree() {
        let mut calls = 0;
        let node = flatten("", |_| {
            calls += 1;
            None
        });
        assert!(node.is_empty());
        assert!(node.attributes.is_none());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_uniform_style_is_one_leaf() {
        for len in [1, 2, 17, 300] {
            let text = "x".repeat(len);
            let node = flatten(&text, |_| Some(StyleAttributes::italic()));
            assert_eq!(node.leaf_count(), 1);
            assert_eq!(node.children.len(), 1);
            assert_eq!(node.plain_text(), text);
        }
    }

    #[test]
    fn test_leaf_count_matches_run_count() {
        let patterns: Vec<Vec<Option<StyleAttributes>>> = vec![
            vec![None, None, Some(StyleAttributes::bold()), None],
            vec![
                Some(StyleAttributes::link("a")),
                Some(StyleAttributes::link("b")),
                Some(StyleAttributes::link("b")),
            ],
            vec![
                Some(StyleAttributes::italic()),
                Some(StyleAttributes::strikethrough()),
                Some(StyleAttributes::italic()),
                Some(StyleAttributes::italic()),
                None,
            ],
        ];

        for styles in patterns {
            let text: String = "a".repeat(styles.len());
            let node = flatten(&text, |i| styles[i].clone());
            assert_eq!(node.leaf_count(), run_lengths(&styles));
        }
    }

    #[test]
    fn test_adjacent_siblings_differ() {
        let text = Text::plain("Some bold text").with_span(StyleSpan::bold(5..9));
        let node = flatten_text(text.as_str(), &text);

        let attrs: Vec<_> = node
            .children
            .iter()
            .map(|c| match c {
                RunChild::Node(n) => n.attributes.clone(),
                RunChild::Text(_) => panic!("expected nested runs"),
            })
            .collect();
        assert_eq!(attrs, vec![None, Some(StyleAttributes::bold()), None]);
        for pair in attrs.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_style_priority() {
        let text = Text::plain("ab")
            .with_span(StyleSpan::bold(0..2))
            .with_span(StyleSpan::italic(0..2))
            .with_span(StyleSpan::link(1..2, "https://example.com"));

        assert_eq!(style_at(&text, 0), Some(StyleAttributes::bold()));
        assert_eq!(
            style_at(&text, 1),
            Some(StyleAttributes::link("https://example.com"))
        );
    }

    #[test]
    fn test_multibyte_characters() {
        let text = Text::plain("héé!").with_span(StyleSpan::italic(1..3));
        let node = flatten_text(text.as_str(), &text);
        assert_eq!(node.leaf_count(), 3);
        assert_eq!(node.plain_text(), "héé!");
    }

    #[test]
    fn test_effective_style_order() {
        let attrs = StyleAttributes {
            link: None,
            weight: Some(BOLD_WEIGHT),
            italic: true,
            strikethrough: true,
        };
        assert_eq!(attrs.effective(), Some(RunStyle::Bold));

        let light = StyleAttributes {
            weight: Some(NORMAL_WEIGHT),
            ..Default::default()
        };
        assert_eq!(light.effective(), None);
    }
}

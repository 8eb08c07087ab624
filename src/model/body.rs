//! Body structuring: regroup flat list items into nested list trees.

use serde::Serialize;

use super::{Element, ListItem, Paragraph, Table, TableOfContents};

/// Deepest list level the structurer builds. Deeper items are placed here,
/// which keeps the tree depth and the rendering recursion bounded.
pub const MAX_NESTING_LEVEL: u32 = 64;

/// A top-level node of a structured body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BodyNode<'a> {
    /// A paragraph, unchanged
    Paragraph(&'a Paragraph),
    /// A table, unchanged
    Table(&'a Table),
    /// A table of contents, unchanged
    TableOfContents(&'a TableOfContents),
    /// A maximal run of consecutive list items
    ListGroup(ListGroup<'a>),
}

/// One nesting level of a list tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListGroup<'a> {
    /// Items and deeper groups in document order
    pub children: Vec<ListEntry<'a>>,
}

/// A child of a [`ListGroup`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ListEntry<'a> {
    /// A list item leaf
    Item(&'a ListItem),
    /// A deeper nesting level
    Group(ListGroup<'a>),
}

impl<'a> ListGroup<'a> {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item `level` groups below this one.
    ///
    /// Each step down reuses the trailing child group or opens a new one.
    pub fn insert(&mut self, item: &'a ListItem, level: u32) {
        let mut group = self;
        for _ in 0..level {
            group = group.trailing_group();
        }
        group.children.push(ListEntry::Item(item));
    }

    /// Items with their depth in the tree, in document order.
    pub fn items(&self) -> Vec<(usize, &'a ListItem)> {
        let mut out = Vec::new();
        self.collect_items(0, &mut out);
        out
    }

    /// Total number of items below this group.
    pub fn item_count(&self) -> usize {
        self.children
            .iter()
            .map(|entry| match entry {
                ListEntry::Item(_) => 1,
                ListEntry::Group(group) => group.item_count(),
            })
            .sum()
    }

    fn collect_items(&self, depth: usize, out: &mut Vec<(usize, &'a ListItem)>) {
        for entry in &self.children {
            match entry {
                ListEntry::Item(item) => out.push((depth, *item)),
                ListEntry::Group(group) => group.collect_items(depth + 1, out),
            }
        }
    }

    fn trailing_group(&mut self) -> &mut ListGroup<'a> {
        if !matches!(self.children.last(), Some(ListEntry::Group(_))) {
            self.children.push(ListEntry::Group(ListGroup::new()));
        }
        match self.children.last_mut() {
            Some(ListEntry::Group(group)) => group,
            _ => unreachable!("trailing entry is a group"),
        }
    }
}

/// Structure a flat element sequence into body nodes.
///
/// Order is preserved. Every maximal run of consecutive list items becomes
/// one [`BodyNode::ListGroup`], nested by each item's level (at most
/// [`MAX_NESTING_LEVEL`]). Elements of unsupported kinds are dropped.
pub fn structure(elements: &[Element]) -> Vec<BodyNode<'_>> {
    let mut nodes = Vec::with_capacity(elements.len());

    for element in elements {
        match element {
            Element::ListItem(item) => {
                let level = item.nesting_level.min(MAX_NESTING_LEVEL);
                if level < item.nesting_level {
                    log::debug!(
                        "Clamping list level {} to {}",
                        item.nesting_level,
                        MAX_NESTING_LEVEL
                    );
                }
                trailing_group(&mut nodes).insert(item, level);
            }
            Element::Paragraph(para) => nodes.push(BodyNode::Paragraph(para)),
            Element::Table(table) => nodes.push(BodyNode::Table(table)),
            Element::TableOfContents(toc) => nodes.push(BodyNode::TableOfContents(toc)),
            Element::Unsupported { kind } => {
                log::debug!("Dropping unsupported element of type {}", kind);
            }
        }
    }

    nodes
}

fn trailing_group<'n, 'a>(nodes: &'n mut Vec<BodyNode<'a>>) -> &'n mut ListGroup<'a> {
    if !matches!(nodes.last(), Some(BodyNode::ListGroup(_))) {
        nodes.push(BodyNode::ListGroup(ListGroup::new()));
    }
    match nodes.last_mut() {
        Some(BodyNode::ListGroup(group)) => group,
        _ => unreachable!("trailing node is a list group"),
    }
}

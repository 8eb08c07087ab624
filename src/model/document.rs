//! Document-level types.

use serde::Serialize;

use super::{body, BodyNode, ListItem, Paragraph, Table, TableOfContents};

/// A source document: a read-only sequence of top-level elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    /// Document title, if the host reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Top-level elements in host order
    pub body: Vec<Element>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from its elements.
    pub fn with_body(body: Vec<Element>) -> Self {
        Self { title: None, body }
    }

    /// Append an element.
    pub fn push(&mut self, element: impl Into<Element>) {
        self.body.push(element.into());
    }

    /// Check if the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Group the body into structured nodes.
    pub fn structure(&self) -> Vec<BodyNode<'_>> {
        body::structure(&self.body)
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.body
            .iter()
            .filter_map(|element| match element {
                Element::Paragraph(p) => Some(p.plain_text()),
                Element::ListItem(item) => Some(item.plain_text()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A top-level element of a host document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A paragraph
    Paragraph(Paragraph),

    /// A list item
    ListItem(ListItem),

    /// A table
    Table(Table),

    /// A table of contents
    TableOfContents(TableOfContents),

    /// Any element kind the pipeline does not handle
    Unsupported {
        /// Host kind tag
        kind: String,
    },
}

impl Element {
    /// Host-style kind name, e.g. `LIST_ITEM`.
    pub fn kind(&self) -> &str {
        match self {
            Element::Paragraph(_) => "PARAGRAPH",
            Element::ListItem(_) => "LIST_ITEM",
            Element::Table(_) => "TABLE",
            Element::TableOfContents(_) => "TABLE_OF_CONTENTS",
            Element::Unsupported { kind } => kind,
        }
    }
}

impl From<Paragraph> for Element {
    fn from(p: Paragraph) -> Self {
        Element::Paragraph(p)
    }
}

impl From<ListItem> for Element {
    fn from(item: ListItem) -> Self {
        Element::ListItem(item)
    }
}

impl From<Table> for Element {
    fn from(table: Table) -> Self {
        Element::Table(table)
    }
}

impl From<TableOfContents> for Element {
    fn from(toc: TableOfContents) -> Self {
        Element::TableOfContents(toc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert!(doc.structure().is_empty());
    }

    #[test]
    fn test_plain_text() {
        let mut doc = Document::new();
        doc.push(Paragraph::heading("Intro", 1));
        doc.push(ListItem::new("first", 0));
        doc.push(Table::default());
        assert_eq!(doc.plain_text(), "Intro\nfirst");
    }

    #[test]
    fn test_element_kind() {
        assert_eq!(Element::from(ListItem::new("a", 0)).kind(), "LIST_ITEM");
        let other = Element::Unsupported {
            kind: "EQUATION".into(),
        };
        assert_eq!(other.kind(), "EQUATION");
    }
}

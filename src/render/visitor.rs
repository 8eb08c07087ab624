//! Visitor pattern for customizing document rendering.
//!
//! A visitor sees every top-level node before the dialect renders it and can
//! let it through, replace its output, or drop it.
//!
//! # Example
//!
//! ```
//! use wikisync::model::Table;
//! use wikisync::render::visitor::{DocumentVisitor, VisitorAction};
//!
//! struct TablePlaceholder;
//!
//! impl DocumentVisitor for TablePlaceholder {
//!     fn visit_table(&mut self, _table: &Table) -> VisitorAction {
//!         VisitorAction::Replace("<!-- table omitted -->".to_string())
//!     }
//! }
//! ```

use crate::model::{ListGroup, Paragraph, Table, TableOfContents};

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the node with custom output.
    Replace(String),

    /// Skip this node entirely (no output, no separator).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the node should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }
}

/// Trait for visiting top-level nodes during rendering.
///
/// All methods return `VisitorAction::Continue` by default.
pub trait DocumentVisitor {
    /// Called before rendering a paragraph (including headings).
    fn visit_paragraph(&mut self, para: &Paragraph) -> VisitorAction {
        let _ = para;
        VisitorAction::Continue
    }

    /// Called before rendering a top-level list group.
    fn visit_list_group(&mut self, group: &ListGroup<'_>) -> VisitorAction {
        let _ = group;
        VisitorAction::Continue
    }

    /// Called before rendering a table.
    fn visit_table(&mut self, table: &Table) -> VisitorAction {
        let _ = table;
        VisitorAction::Continue
    }

    /// Called before rendering a table of contents.
    fn visit_table_of_contents(&mut self, toc: &TableOfContents) -> VisitorAction {
        let _ = toc;
        VisitorAction::Continue
    }
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentVisitor for DefaultVisitor {}

/// Visitor that drops paragraphs holding only blank text.
#[derive(Debug, Clone, Default)]
pub struct SkipEmptyParagraphsVisitor;

impl DocumentVisitor for SkipEmptyParagraphsVisitor {
    fn visit_paragraph(&mut self, para: &Paragraph) -> VisitorAction {
        if para.is_empty() {
            VisitorAction::Skip
        } else {
            VisitorAction::Continue
        }
    }
}

/// Visitor that drops tables and tables of contents, so they do not leave
/// blank lines in the output.
#[derive(Debug, Clone, Default)]
pub struct SkipTablesVisitor;

impl DocumentVisitor for SkipTablesVisitor {
    fn visit_table(&mut self, _table: &Table) -> VisitorAction {
        VisitorAction::Skip
    }

    fn visit_table_of_contents(&mut self, _toc: &TableOfContents) -> VisitorAction {
        VisitorAction::Skip
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
#[derive(Default)]
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn DocumentVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: DocumentVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    fn first_action(
        &mut self,
        mut visit: impl FnMut(&mut dyn DocumentVisitor) -> VisitorAction,
    ) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visit(visitor.as_mut());
            if !matches!(action, VisitorAction::Continue) {
                return action;
            }
        }
        VisitorAction::Continue
    }
}

impl DocumentVisitor for CompositeVisitor {
    fn visit_paragraph(&mut self, para: &Paragraph) -> VisitorAction {
        self.first_action(|v| v.visit_paragraph(para))
    }

    fn visit_list_group(&mut self, group: &ListGroup<'_>) -> VisitorAction {
        self.first_action(|v| v.visit_list_group(group))
    }

    fn visit_table(&mut self, table: &Table) -> VisitorAction {
        self.first_action(|v| v.visit_table(table))
    }

    fn visit_table_of_contents(&mut self, toc: &TableOfContents) -> VisitorAction {
        self.first_action(|v| v.visit_table_of_contents(toc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visitor_action_default() {
        let action = VisitorAction::default();
        assert!(matches!(action, VisitorAction::Continue));
    }

    #[test]
    fn test_skip_empty_paragraphs() {
        let mut visitor = SkipEmptyParagraphsVisitor;
        assert!(visitor.visit_paragraph(&Paragraph::new()).should_skip());
        assert!(!visitor
            .visit_paragraph(&Paragraph::with_text("text"))
            .should_skip());
    }

    #[test]
    fn test_composite_visitor() {
        let mut composite = CompositeVisitor::new()
            .with_visitor(SkipTablesVisitor)
            .with_visitor(DefaultVisitor);

        assert!(composite.visit_table(&Table::default()).should_skip());
        assert!(composite
            .visit_table_of_contents(&TableOfContents)
            .should_skip());

        let action = composite.visit_paragraph(&Paragraph::new());
        assert!(matches!(action, VisitorAction::Continue));
    }
}

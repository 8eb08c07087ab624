//! Document model and intermediate representation.
//!
//! `Document`/`Element` describe the host document as delivered to the
//! pipeline. `BodyNode`/`ListGroup` and `RunNode` are the intermediate
//! representation the renderers consume: list items regrouped into trees and
//! character styles flattened into runs.

pub mod body;
mod document;
mod paragraph;
pub mod runs;
mod text;

pub use body::{structure, BodyNode, ListEntry, ListGroup, MAX_NESTING_LEVEL};
pub use document::{Document, Element};
pub use paragraph::{
    InlineElement, ListItem, Paragraph, ParagraphHeading, Table, TableOfContents,
};
pub use runs::{flatten, flatten_text, style_at, RunChild, RunNode, RunStyle, StyleAttributes};
pub use text::{CharacterStyles, StyleSpan, Text};

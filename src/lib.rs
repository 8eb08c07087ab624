//! # wikisync
//!
//! Convert rich-text documents to wiki-friendly markup.
//!
//! A document is a flat sequence of top-level elements (paragraphs, list
//! items, tables). The pipeline regroups consecutive list items into nested
//! list trees, flattens per-character styling into runs, and renders the
//! result as HTML, Markdown, or Wikitext.
//!
//! ## Quick Start
//!
//! ```
//! use wikisync::model::{Document, Paragraph, Text};
//!
//! fn main() -> wikisync::Result<()> {
//!     let mut doc = Document::new();
//!     let mut para = Paragraph::new();
//!     para.add_text(Text::bold("Hello"));
//!     doc.push(para);
//!
//!     assert_eq!(wikisync::convert("html", &doc)?, "<p><b>Hello</b></p>\n");
//!     assert_eq!(wikisync::convert("markdown", &doc)?, "**Hello**\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Three dialects**: HTML fragments, Markdown, and a Wikitext stub
//! - **Nested lists**: list items regrouped by nesting level
//! - **Style runs**: overlapping character styles reduced to one wrapper per run
//! - **Sync sessions**: last format and destination link persisted per document

pub mod convert;
pub mod error;
pub mod model;
pub mod render;
pub mod session;
pub mod source;

// Re-export commonly used types
pub use convert::{convert, ConvertOptions, ConvertResult, ConverterRegistry, Format};
pub use error::{Error, Result};
pub use model::{
    BodyNode, Document, Element, InlineElement, ListGroup, ListItem, Paragraph, ParagraphHeading,
    RunNode, StyleSpan, Table, TableOfContents, Text,
};
pub use render::{
    ConversionStats, DocumentVisitor, JsonFormat, MarkupRenderer, RenderOptions, VisitorAction,
};
pub use session::{FileStore, MemoryStore, PropertyStore, SidebarState, SyncSession};
pub use source::{DocumentParser, ErrorMode, ParseOptions};

use std::io::Read;
use std::path::Path;

/// Load a JSON document file.
///
/// # Example
///
/// ```no_run
/// use wikisync::parse_file;
///
/// let doc = parse_file("document.json").unwrap();
/// println!("Elements: {}", doc.body.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    DocumentParser::open(path)?.parse()
}

/// Load a JSON document file with custom options.
///
/// # Example
///
/// ```no_run
/// use wikisync::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().lenient();
/// let doc = parse_file_with_options("document.json", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    DocumentParser::open_with_options(path, options)?.parse()
}

/// Load a document from JSON bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    DocumentParser::from_bytes(data)?.parse()
}

/// Load a document from a JSON string.
///
/// # Example
///
/// ```
/// let doc = wikisync::parse_str(r#"{"body": [{"type": "table"}]}"#).unwrap();
/// assert_eq!(doc.body.len(), 1);
/// ```
pub fn parse_str(json: &str) -> Result<Document> {
    DocumentParser::from_json(json)?.parse()
}

/// Load a document from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    DocumentParser::from_reader(reader)?.parse()
}

/// Render a document as an HTML fragment with default options.
pub fn to_html(doc: &Document) -> String {
    render::to_html(doc, &RenderOptions::default())
}

/// Render a document as Markdown with default options.
pub fn to_markdown(doc: &Document) -> String {
    render::to_markdown(doc, &RenderOptions::default())
}

/// Render a document as Wikitext.
pub fn to_wikitext(doc: &Document) -> String {
    render::to_wikitext(doc, &RenderOptions::default())
}

/// Load a JSON document file and convert it to the named format.
///
/// # Example
///
/// ```no_run
/// let html = wikisync::convert_file("document.json", "html").unwrap();
/// std::fs::write("output.html", html).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P, format: &str) -> Result<String> {
    let doc = parse_file(path)?;
    convert(format, &doc)
}

/// Builder for loading and converting documents.
///
/// # Example
///
/// ```no_run
/// use wikisync::WikiSync;
///
/// let markdown = WikiSync::new()
///     .lenient()
///     .with_indent_width(4)
///     .parse("document.json")?
///     .to_markdown();
/// # Ok::<(), wikisync::Error>(())
/// ```
pub struct WikiSync {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl WikiSync {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Enable lenient loading mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Drop blank paragraphs while loading.
    pub fn skip_empty_paragraphs(mut self) -> Self {
        self.parse_options = self.parse_options.skip_empty_paragraphs(true);
        self
    }

    /// Set the list indentation width in spaces.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.render_options = self.render_options.with_indent_width(width);
        self
    }

    /// Set the Markdown list marker.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.render_options = self.render_options.with_list_marker(marker);
        self
    }

    /// Escape markup characters in text.
    pub fn with_escaping(mut self) -> Self {
        self.render_options = self.render_options.with_escaping(true);
        self
    }

    /// Load a JSON document file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<WikiSyncResult> {
        let document = DocumentParser::open_with_options(path, self.parse_options)?.parse()?;
        Ok(WikiSyncResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Load a document from JSON bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<WikiSyncResult> {
        let document =
            DocumentParser::from_bytes_with_options(data, self.parse_options)?.parse()?;
        Ok(WikiSyncResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Wrap an already built document.
    pub fn document(self, document: Document) -> WikiSyncResult {
        WikiSyncResult {
            document,
            render_options: self.render_options,
        }
    }
}

impl Default for WikiSync {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded document plus the render options to convert it with.
#[derive(Debug)]
pub struct WikiSyncResult {
    /// The loaded document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl WikiSyncResult {
    /// Convert to HTML.
    pub fn to_html(&self) -> String {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to Markdown.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to Wikitext.
    pub fn to_wikitext(&self) -> String {
        render::to_wikitext(&self.document, &self.render_options)
    }

    /// Convert to the named format.
    pub fn convert(&self, format: &str) -> Result<String> {
        let format: Format = format.parse()?;
        Ok(convert::renderer_for(format, self.render_options.clone())
            .render_document(&self.document))
    }

    /// Dump the structured body as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::structure_to_json(&self.document, format)
    }

    /// Count the document's structure and text.
    pub fn stats(&self) -> ConversionStats {
        let mut stats = ConversionStats::from_document(&self.document);
        stats.count_text(&self.document.plain_text());
        stats
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

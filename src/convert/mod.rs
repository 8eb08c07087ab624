//! Conversion entry point: select a dialect by name and render.
//!
//! # Example
//!
//! ```
//! use wikisync::convert::{ConverterRegistry, ConvertOptions};
//! use wikisync::model::{Document, Paragraph};
//!
//! fn main() -> wikisync::Result<()> {
//!     let mut doc = Document::new();
//!     doc.push(Paragraph::heading("Title", 1));
//!
//!     let registry = ConverterRegistry::with_defaults();
//!     let result = registry.convert("markdown", &doc, &ConvertOptions::default())?;
//!     assert_eq!(result.content, "# Title\n");
//!     Ok(())
//! }
//! ```

mod format;

pub use format::Format;

use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::{
    render_with_stats, ConversionStats, HtmlRenderer, MarkdownRenderer, MarkupRenderer,
    RenderOptions, WikitextRenderer,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Rendering options
    pub render: RenderOptions,

    /// Whether to collect statistics during conversion
    pub collect_stats: bool,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Converted content
    pub content: String,

    /// Name of the dialect used
    pub format: String,

    /// MIME type of the output
    pub mime_type: &'static str,

    /// Conversion statistics (if collected)
    pub stats: Option<ConversionStats>,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(content: String, format: impl Into<String>, mime_type: &'static str) -> Self {
        Self {
            content,
            format: format.into(),
            mime_type,
            stats: None,
        }
    }

    /// Set conversion statistics.
    pub fn with_stats(mut self, stats: ConversionStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Build the renderer for a built-in format.
pub fn renderer_for(format: Format, options: RenderOptions) -> Arc<dyn MarkupRenderer> {
    match format {
        Format::Html => Arc::new(HtmlRenderer::new(options)),
        Format::Markdown => Arc::new(MarkdownRenderer::new(options)),
        Format::Wikitext => Arc::new(WikitextRenderer::new(options)),
    }
}

/// Registry of markup renderers, keyed by lower-cased name.
pub struct ConverterRegistry {
    renderers: BTreeMap<String, Arc<dyn MarkupRenderer>>,
}

impl ConverterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            renderers: BTreeMap::new(),
        }
    }

    /// Create a registry with the built-in dialects and default options.
    pub fn with_defaults() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Create a registry with the built-in dialects sharing `options`.
    pub fn with_options(options: RenderOptions) -> Self {
        let mut registry = Self::new();
        for format in Format::ALL {
            registry.register(renderer_for(format, options.clone()));
        }
        registry
    }

    /// Register a renderer under its name, replacing any previous one.
    pub fn register(&mut self, renderer: Arc<dyn MarkupRenderer>) {
        self.renderers
            .insert(renderer.name().to_lowercase(), renderer);
    }

    /// Get a renderer by name (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn MarkupRenderer>> {
        self.renderers.get(&name.to_lowercase()).cloned()
    }

    /// Check if a format name is registered.
    pub fn supports(&self, name: &str) -> bool {
        self.renderers.contains_key(&name.to_lowercase())
    }

    /// Registered format names, sorted.
    pub fn formats(&self) -> Vec<&str> {
        self.renderers.keys().map(|s| s.as_str()).collect()
    }

    /// Convert a document with the named renderer.
    ///
    /// Fails with [`Error::UnknownFormat`] if no renderer is registered under
    /// `format`. The registry's renderers keep their own render options;
    /// `options` only controls statistics collection here.
    pub fn convert(
        &self,
        format: &str,
        doc: &Document,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let renderer = self.lookup(format)?;
        Ok(render_result(renderer.as_ref(), doc, options.collect_stats))
    }

    /// Convert with renderer options taken from `options`.
    ///
    /// Built-in formats are rebuilt with `options.render`; custom registered
    /// renderers are used as they are.
    pub fn convert_with_options(
        &self,
        format: &str,
        doc: &Document,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let renderer = self.lookup(format)?;
        let renderer = match format.parse::<Format>() {
            Ok(builtin) if builtin.name() == renderer.name() => {
                renderer_for(builtin, options.render.clone())
            }
            _ => renderer,
        };
        Ok(render_result(renderer.as_ref(), doc, options.collect_stats))
    }

    fn lookup(&self, format: &str) -> Result<Arc<dyn MarkupRenderer>> {
        match self.get_by_name(format) {
            Some(renderer) => {
                log::debug!("Converting with renderer '{}'", renderer.name());
                Ok(renderer)
            }
            None => Err(Error::UnknownFormat(format.to_string())),
        }
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn render_result(
    renderer: &dyn MarkupRenderer,
    doc: &Document,
    collect_stats: bool,
) -> ConvertResult {
    if collect_stats {
        let result = render_with_stats(renderer, doc);
        ConvertResult::new(result.content, result.format, renderer.mime_type())
            .with_stats(result.stats)
    } else {
        ConvertResult::new(
            renderer.render_document(doc),
            renderer.name(),
            renderer.mime_type(),
        )
    }
}

/// Convert a document to the named format with default options.
///
/// `format` is one of `"html"`, `"markdown"`, `"wikitext"`.
pub fn convert(format: &str, doc: &Document) -> Result<String> {
    let format: Format = format.parse()?;
    Ok(renderer_for(format, RenderOptions::default()).render_document(doc))
}

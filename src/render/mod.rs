//! Rendering module for converting documents to markup dialects.

mod html;
mod json;
mod markdown;
mod options;
mod renderer;
mod result;
pub mod visitor;
mod wikitext;

pub use html::{to_html, HtmlRenderer};
pub use json::{structure_to_json, to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::RenderOptions;
pub use renderer::{unsupported_inline, MarkupRenderer};
pub use result::{render_with_stats, ConversionStats, RenderResult};
pub use visitor::{CompositeVisitor, DefaultVisitor, DocumentVisitor, VisitorAction};
pub use wikitext::{to_wikitext, WikitextRenderer, WIKITEXT_PLACEHOLDER};

//! JSON document loader.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::{
    Document, Element, InlineElement, ListItem, Paragraph, ParagraphHeading, StyleSpan, Table,
    TableOfContents, Text, MAX_NESTING_LEVEL,
};

use super::ParseOptions;

/// Loader for documents serialized as JSON.
///
/// Kind tags are matched case-insensitively, so both `list_item` and the
/// host's `LIST_ITEM` spelling are accepted.
pub struct DocumentParser {
    raw: RawDocument,
    options: ParseOptions,
}

impl DocumentParser {
    /// Open a JSON document file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a JSON document file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading document from {}", path.display());
        let data = fs::read(path)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Load a document from JSON bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Load a document from JSON bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let raw = serde_json::from_slice(data).map_err(classify)?;
        Ok(Self { raw, options })
    }

    /// Load a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_bytes(json.as_bytes())
    }

    /// Load a document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Load a document from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Number of top-level elements in the source.
    pub fn element_count(&self) -> usize {
        self.raw.body.len()
    }

    /// Build the document model.
    pub fn parse(&self) -> Result<Document> {
        let mut document = Document::new();
        document.title = self.raw.title.clone();

        for (index, raw) in self.raw.body.iter().enumerate() {
            let element = self
                .element(raw)
                .map_err(|e| Error::InvalidDocument(format!("body[{}]: {}", index, e)))?;

            if self.options.skip_empty_paragraphs {
                if let Element::Paragraph(para) = &element {
                    if para.is_empty() {
                        log::debug!("Skipping empty paragraph at body[{}]", index);
                        continue;
                    }
                }
            }

            document.body.push(element);
        }

        log::debug!("Loaded {} elements", document.body.len());
        Ok(document)
    }

    fn element(&self, raw: &RawElement) -> std::result::Result<Element, String> {
        let element = match raw.kind.to_ascii_lowercase().as_str() {
            "paragraph" => Element::Paragraph(Paragraph {
                heading: self.heading(raw.heading.as_deref())?,
                children: self.children(&raw.children)?,
            }),
            "list_item" => Element::ListItem(ListItem {
                nesting_level: self.nesting_level(raw.nesting_level.unwrap_or(0))?,
                children: self.children(&raw.children)?,
            }),
            "table" => Element::Table(Table {
                rows: raw.rows.unwrap_or(0),
            }),
            "table_of_contents" => Element::TableOfContents(TableOfContents),
            // A bare rule at the top level is held in its own paragraph.
            "horizontal_rule" | "page_break" => {
                let mut para = Paragraph::new();
                para.children.push(self.inline(raw)?);
                Element::Paragraph(para)
            }
            _ => {
                log::debug!("Unsupported element kind '{}'", raw.kind);
                Element::Unsupported {
                    kind: raw.kind.to_ascii_uppercase(),
                }
            }
        };
        Ok(element)
    }

    fn nesting_level(&self, level: u32) -> std::result::Result<u32, String> {
        if level <= MAX_NESTING_LEVEL {
            Ok(level)
        } else if self.options.is_lenient() {
            log::warn!(
                "Nesting level {} exceeds {}, clamping",
                level,
                MAX_NESTING_LEVEL
            );
            Ok(MAX_NESTING_LEVEL)
        } else {
            Err(format!(
                "nesting level {} exceeds {}",
                level, MAX_NESTING_LEVEL
            ))
        }
    }

    fn heading(&self, heading: Option<&str>) -> std::result::Result<ParagraphHeading, String> {
        let Some(name) = heading else {
            return Ok(ParagraphHeading::Normal);
        };
        match ParagraphHeading::parse(name) {
            Some(heading) => Ok(heading),
            None if self.options.is_lenient() => {
                log::warn!("Unknown heading '{}', using NORMAL", name);
                Ok(ParagraphHeading::Normal)
            }
            None => Err(format!("unknown heading '{}'", name)),
        }
    }

    fn children(&self, raw: &[RawElement]) -> std::result::Result<Vec<InlineElement>, String> {
        raw.iter().map(|child| self.inline(child)).collect()
    }

    fn inline(&self, raw: &RawElement) -> std::result::Result<InlineElement, String> {
        let inline = match raw.kind.to_ascii_lowercase().as_str() {
            "text" => InlineElement::Text(self.text(raw)?),
            "horizontal_rule" => InlineElement::HorizontalRule,
            "page_break" => InlineElement::PageBreak,
            _ => InlineElement::Unsupported {
                kind: raw.kind.to_ascii_uppercase(),
            },
        };
        Ok(inline)
    }

    fn text(&self, raw: &RawElement) -> std::result::Result<Text, String> {
        let content = match (&raw.text, self.options.is_lenient()) {
            (Some(text), _) => text.clone(),
            (None, true) => String::new(),
            (None, false) => return Err("text element without 'text'".to_string()),
        };

        let mut styles = Vec::with_capacity(raw.styles.len());
        for span in &raw.styles {
            if span.start <= span.end {
                styles.push(span.clone());
            } else if self.options.is_lenient() {
                log::warn!("Dropping inverted style span {}..{}", span.start, span.end);
            } else {
                return Err(format!(
                    "style span start {} is after end {}",
                    span.start, span.end
                ));
            }
        }

        Ok(Text {
            text: content,
            styles,
        })
    }
}

/// Serialized document shape.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    title: Option<String>,
    body: Vec<RawElement>,
}

/// One element or inline child; fields not used by a kind are ignored.
#[derive(Debug, Deserialize)]
struct RawElement {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    heading: Option<String>,
    #[serde(default)]
    nesting_level: Option<u32>,
    #[serde(default)]
    children: Vec<RawElement>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    styles: Vec<StyleSpan>,
    #[serde(default)]
    rows: Option<usize>,
}

// Syntax errors stay JSON errors; a well-formed value of the wrong shape is
// an invalid document.
fn classify(err: serde_json::Error) -> Error {
    if err.is_data() {
        Error::InvalidDocument(err.to_string())
    } else {
        Error::Json(err)
    }
}

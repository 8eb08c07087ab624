//! Per-document sync session: the last chosen format and the destination
//! link, persisted through an injected property store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::convert::{ConvertOptions, ConverterRegistry, Format};
use crate::error::{Error, Result};
use crate::model::Document;

/// Property key for the last chosen format.
pub const FORMAT_KEY: &str = "format";

/// Property key for the destination link.
pub const LINK_KEY: &str = "link";

/// Key-value storage scoped to one document.
pub trait PropertyStore {
    /// Read a property.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a property.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process property store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    properties: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PropertyStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.properties.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.properties.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Property store backed by a JSON object file.
///
/// A missing file reads as an empty store. Every `set` rewrites the file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    properties: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, loading it if the file exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let properties = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| {
                Error::Store(format!("{}: {}", path.display(), e))
            })?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, properties })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&self.properties)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PropertyStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.properties.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.properties.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// What the sidebar shows when it opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarState {
    /// Format the markup was rendered in
    pub format: String,

    /// Rendered document
    pub markup: String,

    /// Saved destination link, empty if none
    pub link: String,
}

/// A sync session over one document's property store.
pub struct SyncSession<S: PropertyStore> {
    store: S,
    registry: ConverterRegistry,
}

impl<S: PropertyStore> SyncSession<S> {
    /// Create a session with the built-in dialects.
    pub fn new(store: S) -> Self {
        Self::with_registry(store, ConverterRegistry::with_defaults())
    }

    /// Create a session with a custom registry.
    pub fn with_registry(store: S, registry: ConverterRegistry) -> Self {
        Self { store, registry }
    }

    /// Load persisted state and render the document in the stored format.
    ///
    /// A stored format the registry no longer knows falls back to HTML.
    pub fn open(&self, doc: &Document) -> Result<SidebarState> {
        let mut format = self.format()?;
        if !self.registry.supports(&format) {
            log::warn!("Stored format '{}' is not available, using html", format);
            format = Format::Html.name().to_string();
        }

        let markup = self.render(&format, doc)?;
        Ok(SidebarState {
            format,
            markup,
            link: self.destination()?,
        })
    }

    /// Render the document in `format` and remember the choice.
    ///
    /// An unknown format fails before anything is persisted.
    pub fn change_format(&mut self, doc: &Document, format: &str) -> Result<String> {
        let markup = self.render(format, doc)?;
        let name = format.to_lowercase();
        self.store.set(FORMAT_KEY, &name)?;
        log::info!("Saved format '{}'", name);
        Ok(markup)
    }

    /// Remember the destination link.
    pub fn save_destination(&mut self, link: &str) -> Result<()> {
        self.store.set(LINK_KEY, link)?;
        log::info!("Saved destination link");
        Ok(())
    }

    /// Last chosen format, `html` if none was saved.
    pub fn format(&self) -> Result<String> {
        Ok(self
            .store
            .get(FORMAT_KEY)?
            .unwrap_or_else(|| Format::default().name().to_string()))
    }

    /// Saved destination link, empty if none was saved.
    pub fn destination(&self) -> Result<String> {
        Ok(self.store.get(LINK_KEY)?.unwrap_or_default())
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the session and return its store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn render(&self, format: &str, doc: &Document) -> Result<String> {
        let result = self
            .registry
            .convert(format, doc, &ConvertOptions::default())?;
        Ok(result.content)
    }
}

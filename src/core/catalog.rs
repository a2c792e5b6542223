//! Catalog store: the immutable list of curriculum modules.
//!
//! The catalog is loaded once at startup from JSON (a file named in the
//! config, or the bundled `assets/catalog.json`). Loading validates the whole
//! document up front: a single bad record rejects the catalog, so filtering
//! and focus never see a partially-valid list.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::instrument;
use url::Url;

/// Label of the pseudo-category that admits every entry.
pub const ALL_CATEGORIES: &str = "All";

/// Catalog shipped inside the binary.
const BUNDLED_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Result type alias using [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while loading a catalog. All of them are fatal at startup.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog at {path}: {source}")]
    #[diagnostic(
        code(covershelf::catalog::io),
        help("Check the [catalog] path in config.toml")
    )]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not a JSON array of complete entry records.
    #[error("Catalog is not valid: {0}")]
    #[diagnostic(
        code(covershelf::catalog::parse),
        help("Every entry needs id, title, category, thumbnailUrl and contentUrl")
    )]
    Parse(#[from] serde_json::Error),

    /// A required text field is present but blank.
    #[error("Catalog entry #{index} has an empty {field}")]
    #[diagnostic(code(covershelf::catalog::empty_field))]
    EmptyField { index: usize, field: &'static str },

    /// Two entries share an id.
    #[error("Duplicate catalog entry id {id:?}")]
    #[diagnostic(
        code(covershelf::catalog::duplicate_id),
        help("Entry ids must be unique across the catalog")
    )]
    DuplicateId { id: String },

    /// A resource reference is not an absolute URL.
    #[error("Catalog entry {id:?} has an invalid {field}: {reason}")]
    #[diagnostic(code(covershelf::catalog::invalid_url))]
    InvalidUrl {
        id: String,
        field: &'static str,
        reason: url::ParseError,
    },
}

// ============================================================================
// Entry types
// ============================================================================

/// Opaque, stable identifier of a catalog entry.
///
/// Source documents may use JSON strings or integers; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for EntryId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for EntryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => EntryId(s),
            RawId::Unsigned(n) => EntryId(n.to_string()),
            RawId::Signed(n) => EntryId(n.to_string()),
        })
    }
}

/// One interactive content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: EntryId,
    /// Display title, also the search key.
    pub title: String,
    /// Grouping label.
    pub category: String,
    #[serde(alias = "thumbnail")]
    pub thumbnail_url: String,
    /// Address of the embeddable content.
    #[serde(alias = "url")]
    pub content_url: String,
}

impl CatalogEntry {
    pub fn new(
        id: impl Into<EntryId>,
        title: impl Into<String>,
        category: impl Into<String>,
        thumbnail_url: impl Into<String>,
        content_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            thumbnail_url: thumbnail_url.into(),
            content_url: content_url.into(),
        }
    }

    /// Portal-facing module code, e.g. `704X` for id `7`.
    pub fn module_code(&self) -> String {
        format!("{}04X", self.id)
    }

    fn validate(&self, index: usize) -> Result<()> {
        for (field, value) in [
            ("id", self.id.as_str()),
            ("title", self.title.as_str()),
            ("category", self.category.as_str()),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::EmptyField { index, field });
            }
        }

        for (field, value) in [
            ("thumbnailUrl", &self.thumbnail_url),
            ("contentUrl", &self.content_url),
        ] {
            Url::parse(value).map_err(|reason| CatalogError::InvalidUrl {
                id: self.id.to_string(),
                field,
                reason,
            })?;
        }

        Ok(())
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Validated, read-only catalog.
///
/// There is no mutating API: once built, entries, their order and the derived
/// category list are fixed for the life of the value.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    /// "All" followed by each category in first-occurrence order.
    categories: IndexSet<String>,
    by_id: HashMap<EntryId, usize>,
}

impl Catalog {
    /// Build a catalog from already-deserialized entries.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(entries.len());
        let mut categories = IndexSet::new();
        categories.insert(ALL_CATEGORIES.to_string());

        for (index, entry) in entries.iter().enumerate() {
            entry.validate(index)?;
            if by_id.insert(entry.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: entry.id.to_string(),
                });
            }
            categories.insert(entry.category.clone());
        }

        log::debug!(
            "Catalog built: {} entries, {} categories",
            entries.len(),
            categories.len() - 1
        );

        Ok(Self {
            entries,
            categories,
            by_id,
        })
    }

    /// Parse a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Read and parse a catalog file.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        log::info!("Loaded {} catalog entries from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// Load from `path` when given, otherwise fall back to the bundled catalog.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => {
                let catalog = Self::bundled()?;
                log::info!("Loaded {} bundled catalog entries", catalog.len());
                Ok(catalog)
            }
        }
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Category labels, `"All"` first.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(String::as_str).collect()
    }

    /// Whether `label` is `"All"` or a category used by some entry.
    pub fn has_category(&self, label: &str) -> bool {
        self.categories.contains(label)
    }

    /// Position of `label` in [`Catalog::categories`].
    pub fn category_index(&self, label: &str) -> Option<usize> {
        self.categories.get_index_of(label)
    }

    pub fn category_at(&self, index: usize) -> Option<&str> {
        self.categories.get_index(index).map(String::as_str)
    }

    pub fn get(&self, id: &EntryId) -> Option<&CatalogEntry> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

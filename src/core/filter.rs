//! Filter engine: free-text query + category → visible subset.
//!
//! Matching is a pure function of (entry, query, category). The query is
//! compared case-insensitively as a literal substring of the title; it is
//! never trimmed, so a whitespace-only query only matches titles containing
//! that exact whitespace run.

use super::catalog::{Catalog, CatalogEntry, ALL_CATEGORIES};

/// Active category selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Admit every entry.
    #[default]
    All,
    /// Admit entries whose category equals this label exactly.
    Only(String),
}

impl CategoryFilter {
    /// Map a category bar label to a filter; `"All"` maps to [`CategoryFilter::All`].
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(label) => label,
        }
    }

    pub fn admits(&self, entry: &CatalogEntry) -> bool {
        match self {
            Self::All => true,
            Self::Only(label) => entry.category == *label,
        }
    }
}

/// Query and category currently applied to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
}

impl FilterState {
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        matches(entry, &self.query, &self.category)
    }

    /// Whether this is the untouched startup filter.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Whether `entry` passes both the category and the title predicate.
pub fn matches(entry: &CatalogEntry, query: &str, category: &CategoryFilter) -> bool {
    category.admits(entry) && title_matches(&entry.title, query)
}

fn title_matches(title: &str, query: &str) -> bool {
    query.is_empty() || title.to_lowercase().contains(&query.to_lowercase())
}

/// Filter `entries`, preserving their order.
///
/// Accepts any iterator of entry references, so a previous result can be
/// filtered again.
pub fn apply<'a, I>(entries: I, query: &str, category: &CategoryFilter) -> Vec<&'a CatalogEntry>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    entries
        .into_iter()
        .filter(|entry| matches(entry, query, category))
        .collect()
}

/// Visible subset of a catalog, as indices into [`Catalog::entries`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VisibleSet {
    /// No filter pass has run yet.
    #[default]
    NotFiltered,
    /// Result of the last filter pass; may be empty.
    Filtered(Vec<usize>),
}

impl VisibleSet {
    pub fn compute(catalog: &Catalog, filter: &FilterState) -> Self {
        let indices = catalog
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, entry)| filter.matches(entry))
            .map(|(i, _)| i)
            .collect();
        Self::Filtered(indices)
    }

    pub fn indices(&self) -> &[usize] {
        match self {
            Self::NotFiltered => &[],
            Self::Filtered(indices) => indices,
        }
    }

    pub fn is_filtered(&self) -> bool {
        matches!(self, Self::Filtered(_))
    }

    /// A filter pass ran and nothing matched.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::Filtered(indices) if indices.is_empty())
    }

    pub fn len(&self) -> usize {
        self.indices().len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices().is_empty()
    }

    /// Resolve indices to entries.
    pub fn entries<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CatalogEntry> {
        let all = catalog.entries();
        self.indices().iter().filter_map(|&i| all.get(i)).collect()
    }
}

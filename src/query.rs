// src/query.rs
//! Query engine: pure filtering and lookup over a [`Catalog`]
//!
//! Nothing here holds state: the same `(catalog, query, category)`
//! always yields the same ordered result, so callers may memoize on
//! [`FilterKey`].

use crate::catalog::Catalog;
use crate::error::{AtlasError, Result};
use crate::record::AlgorithmRecord;

pub use crate::consts::{ALL, CATEGORY_FILTERS};

/// Memo key for a filter computation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterKey {
    pub query: String,
    pub category: String,
}

impl FilterKey {
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    pub fn apply<'c>(&self, catalog: &'c Catalog) -> Vec<&'c AlgorithmRecord> {
        filter(catalog, &self.query, &self.category)
    }
}

impl Default for FilterKey {
    fn default() -> Self {
        Self::new("", ALL)
    }
}

/// All records in declaration order
pub fn list_all(catalog: &Catalog) -> Vec<&AlgorithmRecord> {
    catalog.iter().collect()
}

/// Records matching both the text query and the category filter.
///
/// The query is lower-cased but never trimmed; it matches as a substring of
/// name, description, abstract or any use case. The category filter is
/// either [`ALL`] or a label that must appear (case-sensitively) inside the
/// record's full category label. Declaration order is preserved.
pub fn filter<'c>(catalog: &'c Catalog, query: &str, category: &str) -> Vec<&'c AlgorithmRecord> {
    let needle = query.to_lowercase();

    catalog
        .iter()
        .filter(|r| r.matches_text(&needle) && r.matches_category(category))
        .collect()
}

/// Exact, case-sensitive lookup by name
pub fn find_by_name<'c>(catalog: &'c Catalog, name: &str) -> Result<&'c AlgorithmRecord> {
    catalog
        .get_by_name(name)
        .ok_or_else(|| AtlasError::NotFound(name.to_string()))
}

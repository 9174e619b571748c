// src/catalog.rs
//! Catalog store: the fixed, read-only list of algorithm records
//!
//! The bundled catalog is compiled in and parsed once on first use.
//! External catalogs go through the same validation and report
//! [`LoadError`] on malformed data, empty names or duplicates.

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{LoadError, Result};
use crate::record::AlgorithmRecord;

const BUNDLED_CATALOG: &str = include_str!("../data/algorithms.json");

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json(BUNDLED_CATALOG).expect("bundled data/algorithms.json is invalid")
});

/// Ordered, immutable collection of records
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<AlgorithmRecord>,
}

impl Catalog {
    /// The catalog shipped with the crate, shared process-wide
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Validate and wrap records, keeping declaration order
    pub fn from_records(records: Vec<AlgorithmRecord>) -> std::result::Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.name.is_empty() {
                return Err(LoadError::EmptyName { index });
            }
            if !seen.insert(record.name.as_str()) {
                return Err(LoadError::DuplicateName(record.name.clone()));
            }
        }
        debug!(count = records.len(), "catalog loaded");
        Ok(Self { records })
    }

    /// Parse a JSON array of records
    pub fn from_json(json: &str) -> std::result::Result<Self, LoadError> {
        let records: Vec<AlgorithmRecord> =
            serde_json::from_str(json).map_err(LoadError::Malformed)?;
        Self::from_records(records)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    /// Every record, in declaration order
    pub fn all(&self) -> &[AlgorithmRecord] {
        &self.records
    }

    /// Exact, case-sensitive lookup
    pub fn get_by_name(&self, name: &str) -> Option<&AlgorithmRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlgorithmRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a AlgorithmRecord;
    type IntoIter = std::slice::Iter<'a, AlgorithmRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

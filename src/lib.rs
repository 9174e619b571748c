// src/lib.rs
//! crypto-atlas — a browsable reference catalog of cryptographic algorithms
//!
//! Features:
//! - Bundled, read-only catalog of algorithm records
//! - Case-insensitive text search combined with category filters
//! - Exact lookup for the detail view
//! - Illustrative (non-cryptographic) demo animation
//! - Persisted theme preference and JSON export for the terminal front end

pub mod catalog;
pub mod config;
pub mod consts;
pub mod demo;
pub mod enums;
pub mod error;
pub mod export;
pub mod query;
pub mod record;
pub mod render;
pub mod session;

// Re-export everything users need at the crate root
pub use catalog::Catalog;
pub use config::{load as load_preferences, Preferences};
pub use consts::{ALL, CATEGORY_FILTERS};
pub use enums::{Category, DetailTab, Theme};
pub use error::{AtlasError, LoadError, Result};
pub use export::export_to_json;
pub use query::{filter, find_by_name, list_all, FilterKey};
pub use record::{AlgorithmRecord, AttrValue};
pub use session::{Session, View};

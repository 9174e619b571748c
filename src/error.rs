// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasError {
    /// No catalog record carries this exact name.
    #[error("no such algorithm: {0}")]
    NotFound(String),

    #[error("Catalog load failed: {0}")]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid preferences TOML: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Could not serialize preferences: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Raised while building a catalog from external data
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("malformed catalog data: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("record #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("duplicate algorithm name: {0}")]
    DuplicateName(String),
}

pub type Result<T> = std::result::Result<T, AtlasError>;

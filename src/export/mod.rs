// src/export/mod.rs
//! Export utilities for crypto-atlas
//!
//! Writes the records currently on screen to a portable document.

pub use json::export_to_json;

pub mod json;

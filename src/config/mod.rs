// src/config/mod.rs
//! Preferences for the presentation layer
//!
//! A single TOML file holding the display theme. The catalog core never
//! reads it.

pub use app::{load, preferences_path, Preferences};

mod app;
mod defaults;

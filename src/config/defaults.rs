// src/config/defaults.rs
use std::path::PathBuf;

use crate::consts::{CONFIG_DIR_NAME, PREFERENCES_FILE, THEME_ENV};
use crate::enums::Theme;

/// Theme used when no preferences file exists; `ATLAS_THEME` wins if it parses
pub fn default_theme() -> Theme {
    std::env::var(THEME_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

/// `<config dir>/crypto-atlas/preferences.toml`, or the working dir when the
/// platform has no config dir
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .unwrap_or_default()
        .join(PREFERENCES_FILE)
}

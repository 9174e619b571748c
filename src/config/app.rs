// src/config/app.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::defaults::{default_path, default_theme};
use crate::consts::CONFIG_PATH_ENV;
use crate::enums::Theme;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_theme")]
    pub theme: Theme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

impl Preferences {
    /// Read preferences; a missing file yields defaults
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no preferences file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, toml::to_string(self)?)?;
        info!(path = %path.display(), theme = self.theme.as_str(), "saved preferences");
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(preferences_path())
    }
}

/// `ATLAS_CONFIG` if set and non-empty, else the platform default location
pub fn preferences_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(default_path)
}

/// Load preferences from [`preferences_path`]
pub fn load() -> Result<Preferences> {
    Preferences::load_from(preferences_path())
}

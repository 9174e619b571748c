// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the closed sets of user-visible choices:
//! algorithm categories, display themes and detail tabs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Classification assigned to every catalog record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Symmetric Encryption")]
    SymmetricEncryption,
    #[serde(rename = "Asymmetric Encryption & Digital Signatures")]
    AsymmetricEncryption,
    #[serde(rename = "Cryptographic Hash Function")]
    HashFunction,
    #[serde(rename = "Key Exchange Protocol")]
    KeyExchange,
    #[serde(rename = "Message Authentication Code")]
    MessageAuthentication,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::SymmetricEncryption,
        Category::AsymmetricEncryption,
        Category::HashFunction,
        Category::KeyExchange,
        Category::MessageAuthentication,
    ];

    /// Full label as stored on records
    pub fn label(self) -> &'static str {
        match self {
            Category::SymmetricEncryption => "Symmetric Encryption",
            Category::AsymmetricEncryption => "Asymmetric Encryption & Digital Signatures",
            Category::HashFunction => "Cryptographic Hash Function",
            Category::KeyExchange => "Key Exchange Protocol",
            Category::MessageAuthentication => "Message Authentication Code",
        }
    }

    /// First word of the label, shown as the grid badge
    pub fn badge(self) -> &'static str {
        self.label().split(' ').next().unwrap_or_default()
    }

    /// Case-sensitive substring test used by the category filter
    pub fn matches_label(self, short: &str) -> bool {
        self.label().contains(short)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display theme, the only persisted user preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Tabs of the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Math,
    Demo,
}

impl FromStr for DetailTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" => Ok(DetailTab::Overview),
            "math" => Ok(DetailTab::Math),
            "demo" => Ok(DetailTab::Demo),
            other => Err(format!("unknown tab: {other}")),
        }
    }
}

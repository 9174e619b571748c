// src/consts.rs
//! Shared constants: filter labels, demo parameters and config locations

use std::time::Duration;

/// Sentinel category filter that disables category matching
pub const ALL: &str = "All";

/// Category filter labels in display order.
/// Short forms are matched as substrings of the full category label.
pub const CATEGORY_FILTERS: [&str; 5] = [ALL, "Symmetric", "Asymmetric", "Hash", "Key Exchange"];

/// Number of animated rounds before a demo produces output
pub const DEMO_ROUNDS: u8 = 5;

/// Delay between two demo rounds
pub const DEMO_STEP_INTERVAL: Duration = Duration::from_millis(600);

/// Cells in the demo state matrix (4 × 4)
pub const STATE_MATRIX_CELLS: usize = 16;

/// Default demo plaintext
pub const DEFAULT_DEMO_INPUT: &str = "Hello World";

/// Default demo key (ignored by hash demos)
pub const DEFAULT_DEMO_KEY: &str = "SecretKey123";

/// Width of the fake digest printed by hash demos, in hex chars
pub const DEMO_DIGEST_HEX_WIDTH: usize = 64;

/// Env var overriding the preferences file location
pub const CONFIG_PATH_ENV: &str = "ATLAS_CONFIG";

/// Env var forcing the initial theme when no preferences file exists
pub const THEME_ENV: &str = "ATLAS_THEME";

/// Directory under the platform config dir
pub const CONFIG_DIR_NAME: &str = "crypto-atlas";

/// Preferences file name
pub const PREFERENCES_FILE: &str = "preferences.toml";

/// Tag written into every JSON export
pub const EXPORT_FORMAT: &str = "crypto-atlas-catalog-v1";

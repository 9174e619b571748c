// src/export/json.rs
use std::path::Path;

use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::consts::EXPORT_FORMAT;
use crate::error::Result;
use crate::record::AlgorithmRecord;

/// Export the given records, in order, to a pretty-printed JSON file.
///
/// Returns the number of records written.
pub fn export_to_json<P: AsRef<Path>>(records: &[&AlgorithmRecord], path: P) -> Result<usize> {
    let path = path.as_ref();

    let export = json!({
        "export_format": EXPORT_FORMAT,
        "exported_at": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "exporter_version": env!("CARGO_PKG_VERSION"),
        "total_algorithms": records.len(),
        "algorithms": records,
    });

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string_pretty(&export)?)?;
    info!(count = records.len(), path = %path.display(), "exported algorithms");

    Ok(records.len())
}

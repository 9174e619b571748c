// tests/common.rs
//! Shared test utilities: logging setup and catalog fixtures

#![allow(dead_code)]

use crypto_atlas::{AlgorithmRecord, Catalog};

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// Names of the bundled catalog in declaration order
pub const FIXTURE_NAMES: [&str; 6] = [
    "AES-256",
    "RSA-2048",
    "SHA-256",
    "SECP256K1",
    "Diffie-Hellman",
    "HMAC",
];

pub fn names(records: &[&AlgorithmRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

/// Minimal valid record JSON with the given name and category label
pub fn record_json(name: &str, category: &str) -> String {
    format!(
        r#"{{
            "name": "{name}",
            "full_name": "{name} full",
            "category": "{category}",
            "year_published": 2020,
            "creator": "Test",
            "description": "desc of {name}",
            "abstract": "abstract of {name}",
            "mathematical_foundation": {{
                "overview": "o",
                "formulas": ["a = b"],
                "complexity_class": "O(1)"
            }},
            "security_properties": {{
                "quantum_resistant": false,
                "known_attacks": [],
                "nist_status": "Draft"
            }},
            "use_cases": ["Testing"],
            "standards": [],
            "license": "MIT"
        }}"#
    )
}

pub fn catalog_of(entries: &[(&str, &str)]) -> Catalog {
    let body: Vec<String> = entries.iter().map(|(n, c)| record_json(n, c)).collect();
    Catalog::from_json(&format!("[{}]", body.join(","))).expect("fixture catalog")
}

// src/record.rs
//! Algorithm records: one immutable entry per cataloged algorithm
//!
//! Loosely shaped sub-records keep a typed core and push any
//! algorithm-specific keys into a flattened `extra` map.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::Category;

/// Extension attribute value (string / number / boolean, or a list of them)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<AttrValue>),
}

impl AttrValue {
    /// Truthiness the views rely on: `false`, `0` and `""` count as unset
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Bool(b) => *b,
            AttrValue::Number(n) => *n != 0.0 && !n.is_nan(),
            AttrValue::Text(s) => !s.is_empty(),
            AttrValue::List(_) => true,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Number(n) => write!(f, "{}", format_number(*n)),
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

/// Whole numbers print without a trailing `.0`
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

pub type Extra = BTreeMap<String, AttrValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathematicalFoundation {
    pub overview: String,
    pub formulas: Vec<String>,
    pub complexity_class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve_equation: Option<String>,
}

/// Free-form walkthrough; only `steps` is guaranteed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExampleWalkthrough {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plaintext: Option<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Either a plain yes/no or a qualified answer ("Partially")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantumResistance {
    Bool(bool),
    Qualified(String),
}

impl QuantumResistance {
    pub fn is_claimed(&self) -> bool {
        match self {
            QuantumResistance::Bool(b) => *b,
            QuantumResistance::Qualified(s) => !s.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityProperties {
    pub quantum_resistant: QuantumResistance,
    #[serde(default)]
    pub known_attacks: Vec<String>,
    pub nist_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fips_approved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collision_resistance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preimage_resistance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avalanche_effect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perfect_secrecy: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Performance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throughput_mbps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_footprint_kb: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_acceleration: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Parameters; the source mixes numbers and prose, hence `AttrValue`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Specifications {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_size: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_sizes: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounds: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_size: Option<AttrValue>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmRecord {
    /// Unique short identifier, primary key for lookup
    pub name: String,
    pub full_name: String,
    pub category: Category,
    pub year_published: i32,
    pub creator: String,
    pub description: String,
    pub r#abstract: String,
    #[serde(default)]
    pub original_paper_url: String,
    #[serde(default)]
    pub reference_implementation_url: String,
    pub mathematical_foundation: MathematicalFoundation,
    #[serde(default)]
    pub example_walkthrough: ExampleWalkthrough,
    pub security_properties: SecurityProperties,
    #[serde(default)]
    pub performance: Performance,
    #[serde(default)]
    pub specifications: Specifications,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub standards: Vec<String>,
    pub license: String,
}

impl AlgorithmRecord {
    /// Substring test over name, description, abstract and use cases.
    /// `needle` must already be lower-cased; an empty needle always matches.
    pub fn matches_text(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.r#abstract.to_lowercase().contains(needle)
            || self
                .use_cases
                .iter()
                .any(|uc| uc.to_lowercase().contains(needle))
    }

    /// `true` if the record passes the given category filter label
    pub fn matches_category(&self, filter: &str) -> bool {
        filter == crate::consts::ALL || self.category.matches_label(filter)
    }

    pub fn is_quantum_safe(&self) -> bool {
        self.security_properties.quantum_resistant.is_claimed()
    }
}

// src/render.rs
//! Plain-text views for the terminal front end
//!
//! Pure string builders; nothing here touches stdout.

use std::fmt::Write as _;

use crate::consts::{CATEGORY_FILTERS, DEMO_ROUNDS};
use crate::demo::{DemoKind, DemoPhase, DemoRun, StateMatrix};
use crate::enums::{DetailTab, Theme};
use crate::record::{format_number, AlgorithmRecord};

pub const EMPTY_GRID: &str = "No algorithms found\nTry adjusting your search query or filters.\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatStatus {
    Good,
    Bad,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: String,
    pub status: StatStatus,
}

impl Stat {
    fn neutral(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            status: StatStatus::Neutral,
        }
    }
}

/// Section title; the dark theme uses ANSI bold cyan
pub fn heading(text: &str, theme: Theme) -> String {
    match theme {
        Theme::Dark => format!("\x1b[1;36m{text}\x1b[0m\n"),
        Theme::Light => format!("{text}\n{}\n", "=".repeat(text.chars().count())),
    }
}

/// Category buttons with the active one bracketed
pub fn filter_bar(active: &str) -> String {
    CATEGORY_FILTERS
        .iter()
        .map(|label| {
            if *label == active {
                format!("[{label}]")
            } else {
                format!(" {label} ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn card(record: &AlgorithmRecord) -> String {
    let security = if record.is_quantum_safe() {
        "Quantum Safe"
    } else {
        "Classical Only"
    };
    let uses = record.use_cases.first().map(String::as_str).unwrap_or("-");

    let mut out = String::new();
    let _ = writeln!(
        out,
        "({}) {}  [{}]",
        record.category.badge(),
        record.name,
        record.year_published
    );
    let _ = writeln!(out, "  {}", record.r#abstract);
    let _ = writeln!(out, "  Security: {security}");
    let _ = writeln!(out, "  Uses:     {uses}");
    out
}

pub fn grid(records: &[&AlgorithmRecord]) -> String {
    if records.is_empty() {
        return EMPTY_GRID.to_string();
    }
    records.iter().map(|r| card(r)).collect::<Vec<_>>().join("\n")
}

pub fn quick_stats(record: &AlgorithmRecord) -> Vec<Stat> {
    let quantum = record.is_quantum_safe();
    let nist = &record.security_properties.nist_status;
    let specs = &record.specifications;

    let block_size = match &specs.block_size {
        Some(v) if v.is_truthy() => format!("{v} bits"),
        _ => "N/A".to_string(),
    };
    let rounds = match &specs.rounds {
        Some(v) if v.is_truthy() => v.to_string(),
        _ => "N/A".to_string(),
    };
    let throughput = match record.performance.throughput_mbps {
        Some(t) if t != 0.0 => format!("~{} MB/s", format_number(t)),
        _ => "N/A".to_string(),
    };

    vec![
        Stat {
            label: "Quantum Resistant",
            value: if quantum { "Yes" } else { "No" }.to_string(),
            status: if quantum { StatStatus::Good } else { StatStatus::Bad },
        },
        Stat {
            label: "NIST Status",
            value: nist.clone(),
            status: if nist.contains("Approved") {
                StatStatus::Good
            } else {
                StatStatus::Neutral
            },
        },
        Stat::neutral(
            "Complexity",
            record.mathematical_foundation.complexity_class.clone(),
        ),
        Stat::neutral("Block Size", block_size),
        Stat::neutral("Rounds", rounds),
        Stat {
            label: "Throughput",
            value: throughput,
            status: StatStatus::Good,
        },
    ]
}

fn header(record: &AlgorithmRecord, theme: Theme) -> String {
    let mut out = heading(&format!("{} ({})", record.name, record.year_published), theme);
    let _ = writeln!(out, "{}", record.full_name);
    let _ = writeln!(out, "{} · by {}", record.category, record.creator);
    if !record.original_paper_url.is_empty() {
        let _ = writeln!(out, "Paper: {}", record.original_paper_url);
    }
    if !record.reference_implementation_url.is_empty() {
        let _ = writeln!(
            out,
            "Reference implementation: {}",
            record.reference_implementation_url
        );
    }
    out
}

pub fn overview(record: &AlgorithmRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", record.r#abstract);

    let walkthrough = &record.example_walkthrough;
    if !walkthrough.steps.is_empty() {
        let _ = writeln!(out, "Step-by-Step Example");
        if let Some(plaintext) = &walkthrough.plaintext {
            let _ = writeln!(out, "  plaintext: {plaintext}");
        }
        for step in &walkthrough.steps {
            let _ = writeln!(out, "  {step}");
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Use Cases: {}", record.use_cases.join(", "));
    let _ = writeln!(out, "Standards: {}", record.standards.join(", "));
    let _ = writeln!(
        out,
        "Known attacks: {}",
        record.security_properties.known_attacks.join(", ")
    );
    let _ = writeln!(out, "License: {}", record.license);
    out
}

pub fn math(record: &AlgorithmRecord) -> String {
    let foundation = &record.mathematical_foundation;
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", foundation.overview);
    for (i, formula) in foundation.formulas.iter().enumerate() {
        let _ = writeln!(out, "  {}. {formula}", i + 1);
    }
    if let Some(curve) = &foundation.curve_equation {
        let _ = writeln!(out, "\nCurve: {curve}");
    }
    let _ = writeln!(out, "\nComplexity: {}", foundation.complexity_class);
    out
}

pub fn demo_panel(demo: &DemoRun) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Input: {}", demo.input());
    if demo.kind() != DemoKind::Checksum {
        let _ = writeln!(out, "Key:   {}", demo.key());
    }
    match demo.phase() {
        DemoPhase::Idle => {
            let _ = writeln!(out, "Output: // Waiting for input...");
            out.push_str(&StateMatrix::idle().render());
        }
        DemoPhase::Running { round } => {
            let _ = writeln!(out, "Processing Round {round}/{DEMO_ROUNDS}...");
        }
        DemoPhase::Complete(output) => {
            let _ = writeln!(out, "Output: {output}");
            out.push_str(&StateMatrix::idle().render());
        }
    }
    out
}

/// Full detail view for one record on the given tab
pub fn detail(
    record: &AlgorithmRecord,
    tab: DetailTab,
    demo: Option<&DemoRun>,
    theme: Theme,
) -> String {
    let mut out = header(record, theme);
    out.push('\n');
    for stat in quick_stats(record) {
        let marker = match stat.status {
            StatStatus::Good => "+",
            StatStatus::Bad => "-",
            StatStatus::Neutral => " ",
        };
        let _ = writeln!(out, "{marker} {:<18} {}", stat.label, stat.value);
    }
    out.push('\n');
    out.push_str(&match (tab, demo) {
        (DetailTab::Overview, _) => overview(record),
        (DetailTab::Math, _) => math(record),
        (DetailTab::Demo, Some(demo)) => demo_panel(demo),
        (DetailTab::Demo, None) => String::new(),
    });
    out
}

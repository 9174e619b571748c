// src/demo.rs
//! Illustrative demo runner shown on the detail view
//!
//! NOTHING in here is cryptography. The animation shuffles random bytes
//! and the "output" is a toy transform picked by category, labelled as
//! illustrative wherever it is displayed.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::Rng;

use crate::consts::{
    DEFAULT_DEMO_INPUT, DEFAULT_DEMO_KEY, DEMO_DIGEST_HEX_WIDTH, DEMO_ROUNDS, STATE_MATRIX_CELLS,
};
use crate::enums::Category;

/// Which toy transform a category gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    Checksum,
    XorBase64,
    Generic,
}

impl DemoKind {
    pub fn for_category(category: Category) -> Self {
        if category.matches_label("Hash") {
            DemoKind::Checksum
        } else if category.matches_label("Symmetric") {
            DemoKind::XorBase64
        } else {
            DemoKind::Generic
        }
    }

    /// Hash demos have no key field
    pub fn takes_key(self) -> bool {
        self != DemoKind::Checksum
    }
}

/// Placeholder result of a demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOutput(String);

impl DemoOutput {
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DemoOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  (illustrative only, not a real computation)", self.0)
    }
}

pub fn illustrative_output(kind: DemoKind, input: &str, key: &str) -> DemoOutput {
    let text = match kind {
        DemoKind::Checksum => format!(
            "0x{:0width$x}",
            rolling_checksum(input),
            width = DEMO_DIGEST_HEX_WIDTH
        ),
        DemoKind::XorBase64 => STANDARD.encode(xor_with_key(input.as_bytes(), key.as_bytes())),
        DemoKind::Generic => {
            let encoded = STANDARD.encode(input);
            let head: String = encoded.chars().take(16).collect();
            format!("Operation Complete: {head}...")
        }
    };
    DemoOutput(text)
}

/// `h = h * 31 + unit` over UTF-16 units, wrapping at 32 bits
pub fn rolling_checksum(input: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in input.encode_utf16() {
        h = (h << 5).wrapping_sub(h).wrapping_add(i32::from(unit));
    }
    h.unsigned_abs()
}

fn xor_with_key(data: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }
    data.iter()
        .zip(key.iter().cycle())
        .map(|(d, k)| d ^ k)
        .collect()
}

/// 4 × 4 grid of bytes drawn during the animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateMatrix {
    cells: [u8; STATE_MATRIX_CELLS],
    highlighted: [bool; STATE_MATRIX_CELLS],
}

impl StateMatrix {
    /// All-zero matrix shown when nothing is running
    pub fn idle() -> Self {
        Self {
            cells: [0; STATE_MATRIX_CELLS],
            highlighted: [false; STATE_MATRIX_CELLS],
        }
    }

    pub fn scrambled<R: Rng + ?Sized>(round: u8, rng: &mut R) -> Self {
        let mut cells = [0u8; STATE_MATRIX_CELLS];
        rng.fill(&mut cells[..]);
        let mut highlighted = [false; STATE_MATRIX_CELLS];
        for (i, h) in highlighted.iter_mut().enumerate() {
            *h = (i + round as usize) % 3 == 0;
        }
        Self { cells, highlighted }
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.get(index).copied().unwrap_or(false)
    }

    /// Four text rows, highlighted cells in brackets
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, byte) in self.cells.iter().enumerate() {
            let cell = hex::encode([*byte]);
            if self.highlighted[i] {
                out.push_str(&format!("[{cell}]"));
            } else {
                out.push_str(&format!(" {cell} "));
            }
            if i % 4 == 3 {
                out.push('\n');
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoFrame {
    pub round: u8,
    pub matrix: StateMatrix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoPhase {
    Idle,
    Running { round: u8 },
    Complete(DemoOutput),
}

/// Demo state for one selected algorithm
#[derive(Debug, Clone)]
pub struct DemoRun {
    kind: DemoKind,
    input: String,
    key: String,
    phase: DemoPhase,
}

impl DemoRun {
    pub fn new(category: Category) -> Self {
        Self {
            kind: DemoKind::for_category(category),
            input: DEFAULT_DEMO_INPUT.to_string(),
            key: DEFAULT_DEMO_KEY.to_string(),
            phase: DemoPhase::Idle,
        }
    }

    pub fn kind(&self) -> DemoKind {
        self.kind
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    pub fn phase(&self) -> &DemoPhase {
        &self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, DemoPhase::Running { .. })
    }

    pub fn output(&self) -> Option<&DemoOutput> {
        match &self.phase {
            DemoPhase::Complete(out) => Some(out),
            _ => None,
        }
    }

    /// Begin a run. Returns `false` while a run is already in progress.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.phase = DemoPhase::Running { round: 0 };
        true
    }

    /// Advance one round; the last round completes the run.
    /// Returns `None` when not running.
    pub fn tick_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<DemoFrame> {
        let DemoPhase::Running { round } = &self.phase else {
            return None;
        };
        let round = *round + 1;
        let matrix = StateMatrix::scrambled(round, rng);

        self.phase = if round >= DEMO_ROUNDS {
            DemoPhase::Complete(illustrative_output(self.kind, &self.input, &self.key))
        } else {
            DemoPhase::Running { round }
        };
        Some(DemoFrame { round, matrix })
    }

    pub fn tick(&mut self) -> Option<DemoFrame> {
        self.tick_with(&mut rand::rng())
    }

    pub fn reset(&mut self) {
        self.phase = DemoPhase::Idle;
    }
}

//! The terminal decision structure

use crate::proof::ProofNode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Confidence band for a decision
///
/// Each band carries a fixed associated value; PROVEN and HIGH snap the
/// reported confidence to 1.0 / 0.95 instead of the computed mean. The
/// snapping interacts with the 0.95 decision threshold (a HIGH-band mean
/// of 0.92 reports 0.95 and clears the gate), so it must not be changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLevel {
    /// Mean ≥ 0.95; reported value 1.0
    Proven,
    /// Mean in [0.90, 0.95); reported value 0.95
    High,
    /// Anything below, reported as the raw mean
    Medium,
    /// Sentinel chain or refusal
    Insufficient,
}

impl ConfidenceLevel {
    /// Fixed value associated with this band
    pub fn value(&self) -> f64 {
        match self {
            ConfidenceLevel::Proven => 1.0,
            ConfidenceLevel::High => 0.95,
            ConfidenceLevel::Medium => 0.75,
            ConfidenceLevel::Insufficient => 0.0,
        }
    }

    /// Canonical upper-case name (wire representation)
    pub fn name(&self) -> &'static str {
        match self {
            ConfidenceLevel::Proven => "PROVEN",
            ConfidenceLevel::High => "HIGH",
            ConfidenceLevel::Medium => "MEDIUM",
            ConfidenceLevel::Insufficient => "INSUFFICIENT",
        }
    }
}

/// Terminal output of one evaluation
///
/// Exactly one of three shapes is produced: refused (ethics/legal gate),
/// insufficient (a gate failed), or decided (all gates passed). There is
/// no retry or partial-result shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// The yes/no verdict (false for refusals and insufficiency)
    pub answer: bool,

    /// Reported confidence value (band-snapped, see [`ConfidenceLevel`])
    pub confidence: f64,

    /// Confidence band
    pub confidence_label: ConfidenceLevel,

    /// The proof chain backing the verdict (empty on refusal)
    pub proof_chain: Vec<ProofNode>,

    /// Human-readable limitations of this evaluation
    pub limitations: Vec<String>,

    /// Truncated content hash identifying this chain instance,
    /// or the literal "REJECTED" / "INSUFFICIENT"
    pub verification_code: String,

    /// Whether the request was refused outright
    pub refused: bool,

    /// Refusal reason (set only when refused)
    pub refuse_reason: Option<String>,

    /// Numbered per-node reasoning text
    pub reasoning: Option<String>,

    /// Alternative conclusion paths considered (currently always empty)
    pub alternative_paths: Vec<String>,

    /// Free-form uncertainty diagnostics
    pub uncertainty_analysis: Map<String, Value>,

    /// Free-form falsifiability diagnostics (diagnostic hash on success)
    pub falsifiability_test: Map<String, Value>,
}

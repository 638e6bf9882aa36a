//! Proof nodes - the ordered steps of a conclusion chain

use crate::evidence::Evidence;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a proof node (UUIDv4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(uuid::Uuid);

impl NodeId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Parse a NodeId from its string form
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid node id: {}", e))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One step in an ordered conclusion chain
///
/// Nodes are appended in evaluation order and never reordered; the last
/// node of a chain is the conclusion. `contradictions` is carried for the
/// wire format but is never populated by the current chain builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProofNode {
    /// Unique identifier
    pub id: NodeId,

    /// The statement this node asserts
    pub statement: String,

    /// Supporting evidence (may be empty for inferred nodes)
    pub evidence: Vec<Evidence>,

    /// Provenance tag for how this node was derived
    /// (e.g. "kb_match:<fact-id>", "infer_risk", "no_inference")
    pub logical_step: String,

    /// Comma-joined evidence source names, or "inference"
    pub verifiable_source: String,

    /// Known contradicting statements
    pub contradictions: Vec<String>,

    /// When this node was created
    pub timestamp: DateTime<Utc>,
}

impl ProofNode {
    /// Create a node with a fresh id and the current timestamp
    pub fn new(
        statement: impl Into<String>,
        evidence: Vec<Evidence>,
        logical_step: impl Into<String>,
        verifiable_source: impl Into<String>,
    ) -> Self {
        Self {
            id: NodeId::new(),
            statement: statement.into(),
            evidence,
            logical_step: logical_step.into(),
            verifiable_source: verifiable_source.into(),
            contradictions: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    /// Arithmetic mean of the attached evidence confidences
    ///
    /// A node with no evidence has confidence 0.
    pub fn weighted_confidence(&self) -> f64 {
        if self.evidence.is_empty() {
            return 0.0;
        }
        let total: f64 = self.evidence.iter().map(|e| e.confidence).sum();
        total / self.evidence.len() as f64
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::evidence::EvidenceKind;
    use proptest::prelude::*;

    proptest! {
        /// Property: the mean confidence lies between the min and max evidence confidence
        #[test]
        fn test_weighted_confidence_bounded(confs in proptest::collection::vec(0.0f64..=1.0, 1..8)) {
            let evidence: Vec<Evidence> = confs
                .iter()
                .map(|&c| Evidence::new("e", "src", EvidenceKind::Other, c))
                .collect();
            let node = ProofNode::new("stmt", evidence, "kb_match:p", "src");

            let min = confs.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = confs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let wc = node.weighted_confidence();

            prop_assert!(wc >= min - 1e-9 && wc <= max + 1e-9,
                "mean {} outside [{}, {}]", wc, min, max);
        }

        /// Property: confidence stays in [0, 1] for valid evidence
        #[test]
        fn test_weighted_confidence_range(confs in proptest::collection::vec(0.0f64..=1.0, 0..8)) {
            let evidence: Vec<Evidence> = confs
                .iter()
                .map(|&c| Evidence::new("e", "src", EvidenceKind::Other, c))
                .collect();
            let node = ProofNode::new("stmt", evidence, "kb_match:p", "src");
            let wc = node.weighted_confidence();
            prop_assert!((0.0..=1.0).contains(&wc));
        }
    }
}

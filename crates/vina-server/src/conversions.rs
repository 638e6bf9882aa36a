//! Wire-format views of domain decisions
//!
//! A proof node's weighted confidence is a derived quantity; on the wire
//! it is emitted as a plain numeric field per node so clients never see a
//! computed-on-access value.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use vina_domain::{ConfidenceLevel, Decision, Evidence, ProofNode};

/// Serializable view of one proof node
#[derive(Debug, Clone, Serialize)]
pub struct ProofNodeView {
    /// Node identifier
    pub id: String,
    /// Asserted statement
    pub statement: String,
    /// Supporting evidence
    pub evidence: Vec<Evidence>,
    /// Provenance tag
    pub logical_step: String,
    /// Comma-joined evidence sources, or "inference"
    pub verifiable_source: String,
    /// Known contradicting statements
    pub contradictions: Vec<String>,
    /// Node creation time
    pub timestamp: DateTime<Utc>,
    /// Mean evidence confidence, materialized
    pub weighted_confidence: f64,
}

impl From<&ProofNode> for ProofNodeView {
    fn from(node: &ProofNode) -> Self {
        Self {
            id: node.id.to_string(),
            statement: node.statement.clone(),
            evidence: node.evidence.clone(),
            logical_step: node.logical_step.clone(),
            verifiable_source: node.verifiable_source.clone(),
            contradictions: node.contradictions.clone(),
            timestamp: node.timestamp,
            weighted_confidence: node.weighted_confidence(),
        }
    }
}

/// Serializable view of a terminal decision
#[derive(Debug, Clone, Serialize)]
pub struct DecisionView {
    /// The yes/no verdict
    pub answer: bool,
    /// Reported (band-snapped) confidence
    pub confidence: f64,
    /// Confidence band name
    pub confidence_label: ConfidenceLevel,
    /// The backing proof chain
    pub proof_chain: Vec<ProofNodeView>,
    /// Evaluation limitations
    pub limitations: Vec<String>,
    /// Chain verification code
    pub verification_code: String,
    /// Whether the request was refused
    pub refused: bool,
    /// Refusal reason, when refused
    pub refuse_reason: Option<String>,
    /// Numbered reasoning text
    pub reasoning: Option<String>,
    /// Alternative conclusion paths
    pub alternative_paths: Vec<String>,
    /// Uncertainty diagnostics
    pub uncertainty_analysis: Map<String, Value>,
    /// Falsifiability diagnostics
    pub falsifiability_test: Map<String, Value>,
}

impl From<Decision> for DecisionView {
    fn from(decision: Decision) -> Self {
        Self {
            answer: decision.answer,
            confidence: decision.confidence,
            confidence_label: decision.confidence_label,
            proof_chain: decision.proof_chain.iter().map(ProofNodeView::from).collect(),
            limitations: decision.limitations,
            verification_code: decision.verification_code,
            refused: decision.refused,
            refuse_reason: decision.refuse_reason,
            reasoning: decision.reasoning,
            alternative_paths: decision.alternative_paths,
            uncertainty_analysis: decision.uncertainty_analysis,
            falsifiability_test: decision.falsifiability_test,
        }
    }
}

//! Decision assembly
//!
//! Ties the pipeline stages together and produces exactly one of three
//! terminal decision shapes: refused, insufficient, or decided.

use crate::chain::{build_chain, ICU_TRANSFER};
use crate::confidence::{calculate_confidence, cross_validate};
use crate::ethics::EthicsFilter;
use crate::knowledge::KnowledgeBase;
use crate::parser::Parser;
use crate::prover::verify_chain;
use serde_json::{json, Map, Value};
use sha2::{Digest, Sha256};
use tracing::debug;
use vina_domain::{BoundaryViolation, ConfidenceLevel, Decision, ProofNode};

/// Minimum snapped confidence required for a decided answer
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.95;

/// The proof-chain decision evaluator
///
/// Configured with an injected fact set; there is no subclassing and no
/// ambient state. An engine is consumed within a single request and holds
/// nothing shared, so per-request construction needs no locking.
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    kb: KnowledgeBase,
    ethics: EthicsFilter,
    parser: Parser,
    min_confidence: f64,
}

impl DecisionEngine {
    /// Create an engine over the given fact set
    pub fn new(kb: KnowledgeBase) -> Self {
        Self {
            kb,
            ethics: EthicsFilter::new(),
            parser: Parser::new(),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }

    /// Override the decision threshold
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Evaluate a problem statement into a terminal decision
    ///
    /// Deterministic up to node/fact identifiers and timestamps; performs
    /// no I/O and never retries.
    pub fn solve(&self, problem: &str) -> Decision {
        let parsed = self.parser.parse(problem);
        let hits = self.kb.query(&parsed.raw_text);
        debug!(hits = hits.len(), goal = %parsed.goal, "knowledge base queried");

        let proof_chain = build_chain(&hits);

        if let Some(violation) = self.ethics.check(&parsed.raw_text, &proof_chain) {
            debug!(category = %violation.category, "boundary violation, refusing");
            return self.refuse_with_reason(&violation);
        }

        let prover_ok = verify_chain(&proof_chain, &parsed.goal);
        let (agree, alt) = cross_validate(&parsed, &proof_chain);
        let (confidence_value, confidence_label) = calculate_confidence(&proof_chain);

        if confidence_value < self.min_confidence || !agree || !prover_ok {
            debug!(
                confidence = confidence_value,
                agree, prover_ok, "gate failed, returning insufficiency"
            );
            return self.insufficient_response(proof_chain, confidence_value);
        }

        let final_statement = proof_chain
            .last()
            .map(|n| n.statement.trim().to_lowercase())
            .unwrap_or_default();
        let answer = if final_statement == ICU_TRANSFER {
            true
        } else {
            !(final_statement.starts_with("not ") || final_statement.starts_with("insufficient"))
        };

        let verification_code = generate_verification_code(&proof_chain);
        let reasoning = generate_reasoning(&proof_chain);

        let mut uncertainty_analysis = Map::new();
        uncertainty_analysis.insert("agreement_alt".to_string(), json!(alt));
        let mut falsifiability_test = Map::new();
        falsifiability_test.insert("hash".to_string(), json!(diagnostic_hash(&proof_chain)));

        Decision {
            answer,
            confidence: confidence_value,
            confidence_label,
            proof_chain,
            limitations: Vec::new(),
            verification_code,
            refused: false,
            refuse_reason: None,
            reasoning: Some(reasoning),
            alternative_paths: Vec::new(),
            uncertainty_analysis,
            falsifiability_test,
        }
    }

    /// Terminal state 1: ethics/legal refusal
    ///
    /// Discards the proof chain entirely.
    fn refuse_with_reason(&self, violation: &BoundaryViolation) -> Decision {
        let message = format!("Từ chối [{}]: {}", violation.category, violation.reason);

        let mut uncertainty_analysis = Map::new();
        uncertainty_analysis.insert("severity".to_string(), json!(violation.severity));

        Decision {
            answer: false,
            confidence: 1.0,
            confidence_label: ConfidenceLevel::Insufficient,
            proof_chain: Vec::new(),
            limitations: vec![violation.reason.clone()],
            verification_code: "REJECTED".to_string(),
            refused: true,
            refuse_reason: Some(message.clone()),
            reasoning: Some(message),
            alternative_paths: Vec::new(),
            uncertainty_analysis,
            falsifiability_test: Map::new(),
        }
    }

    /// Terminal state 2: a gate failed, carry the chain with limitations
    fn insufficient_response(&self, proof_chain: Vec<ProofNode>, confidence: f64) -> Decision {
        let confidence_label = if confidence == 0.0 {
            ConfidenceLevel::Insufficient
        } else {
            ConfidenceLevel::Medium
        };
        let reasoning = if proof_chain.is_empty() {
            "Không đủ dữ liệu".to_string()
        } else {
            generate_reasoning(&proof_chain)
        };

        let mut uncertainty_analysis = Map::new();
        uncertainty_analysis.insert("confidence".to_string(), json!(confidence));
        uncertainty_analysis.insert("status".to_string(), json!("insufficient"));

        Decision {
            answer: false,
            confidence,
            confidence_label,
            proof_chain,
            limitations: vec![
                format!(
                    "Độ tin cậy {:.0}% < ngưỡng yêu cầu {:.0}%",
                    confidence * 100.0,
                    self.min_confidence * 100.0
                ),
                "Cần bổ sung bằng chứng hoặc làm rõ câu hỏi".to_string(),
            ],
            verification_code: "INSUFFICIENT".to_string(),
            refused: false,
            refuse_reason: None,
            reasoning: Some(reasoning),
            alternative_paths: Vec::new(),
            uncertainty_analysis,
            falsifiability_test: Map::new(),
        }
    }
}

/// Content hash identifying a specific proof-chain instance
///
/// Each node is reduced to a sorted-key JSON record of its id, statement,
/// and (source, confidence) evidence pairs; chain order is preserved. The
/// code is "Proof-" plus the first 12 hex characters of the SHA-256 of
/// that serialization.
fn generate_verification_code(proof_chain: &[ProofNode]) -> String {
    let records: Vec<Value> = proof_chain
        .iter()
        .map(|node| {
            json!({
                "evid": node
                    .evidence
                    .iter()
                    .map(|e| json!([e.source, e.confidence]))
                    .collect::<Vec<Value>>(),
                "id": node.id.to_string(),
                "stmt": node.statement,
            })
        })
        .collect();
    let serial = serde_json::to_string(&records).expect("proof chain serializes");
    let digest = Sha256::digest(serial.as_bytes());
    format!("Proof-{}", &hex::encode(digest)[..12])
}

/// Diagnostic hash over concatenated statements and sources (16 hex chars)
fn diagnostic_hash(proof_chain: &[ProofNode]) -> String {
    let mut content = String::new();
    for node in proof_chain {
        content.push_str(&node.statement);
        for evidence in &node.evidence {
            content.push_str(&evidence.source);
        }
    }
    hex::encode(Sha256::digest(content.as_bytes()))[..16].to_string()
}

/// Numbered per-node reasoning text
///
/// Each line carries the statement, its weighted-confidence percentage,
/// the deduplicated evidence kinds (first-seen order, for determinism),
/// and the contradiction count when present.
fn generate_reasoning(proof_chain: &[ProofNode]) -> String {
    proof_chain
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let contradiction_note = if node.contradictions.is_empty() {
                String::new()
            } else {
                format!(" [Mâu thuẫn: {}]", node.contradictions.len())
            };
            let evidence_note = if node.evidence.is_empty() {
                String::new()
            } else {
                let mut kinds: Vec<&str> = Vec::new();
                for evidence in &node.evidence {
                    if !kinds.contains(&evidence.kind.name()) {
                        kinds.push(evidence.kind.name());
                    }
                }
                format!(" [{}]", kinds.join(", "))
            };
            format!(
                "{}. {} (tin cậy: {:.0}%){}{}",
                i + 1,
                node.statement,
                node.weighted_confidence() * 100.0,
                evidence_note,
                contradiction_note
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

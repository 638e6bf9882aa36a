//! Proof-chain construction from fact-store hits

use crate::knowledge::Fact;
use vina_domain::ProofNode;

/// Synthetic conclusion appended by the risk-inference rule
pub const ICU_TRANSFER: &str = "perform_icu_transfer";

/// Sentinel statement for an empty chain
pub const INSUFFICIENT_EVIDENCE: &str = "INSUFFICIENT_EVIDENCE";

/// Build an ordered proof chain from fact hits
///
/// One node per hit carrying the hit's evidence, then a single post-pass
/// rule: any statement mentioning STEMI or ACS appends exactly one
/// zero-confidence `perform_icu_transfer` node. An empty chain gets
/// exactly one sentinel node. The chain is never reordered afterwards;
/// its last element is the conclusion.
pub fn build_chain(hits: &[&Fact]) -> Vec<ProofNode> {
    let mut nodes: Vec<ProofNode> = hits
        .iter()
        .map(|fact| {
            let sources: Vec<&str> = fact
                .evidence
                .iter()
                .map(|e| e.source.as_str())
                .filter(|s| !s.is_empty())
                .collect();
            ProofNode::new(
                fact.statement.clone(),
                fact.evidence.clone(),
                format!("kb_match:{}", fact.id),
                sources.join(","),
            )
        })
        .collect();

    if nodes
        .iter()
        .any(|n| n.statement.contains("STEMI") || n.statement.contains("ACS"))
    {
        nodes.push(ProofNode::new(ICU_TRANSFER, vec![], "infer_risk", "inference"));
    }

    if nodes.is_empty() {
        nodes.push(ProofNode::new(
            INSUFFICIENT_EVIDENCE,
            vec![],
            "no_inference",
            "inference",
        ));
    }

    nodes
}

//! Terminal-statement check
//!
//! A syntactic comparison of the chain's conclusion against the parsed
//! goal. This is not logical proof and must not be strengthened into one.

use crate::chain::INSUFFICIENT_EVIDENCE;
use crate::parser::GOAL_DECISION;
use vina_domain::ProofNode;

/// Check the chain's terminal statement against the goal
///
/// An empty chain never verifies. With a specific goal the trimmed,
/// case-folded terminal statement must equal the goal or its "not "
/// negation. The generic [`GOAL_DECISION`] goal accepts any concrete
/// conclusion, i.e. anything but the insufficiency sentinel.
pub fn verify_chain(proof_chain: &[ProofNode], goal: &str) -> bool {
    let Some(last) = proof_chain.last() else {
        return false;
    };
    let terminal = last.statement.trim().to_lowercase();
    let goal = goal.trim().to_lowercase();

    if goal == GOAL_DECISION {
        return terminal != INSUFFICIENT_EVIDENCE.to_lowercase();
    }

    terminal == goal || terminal == format!("not {}", goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ICU_TRANSFER;
    use crate::parser::GOAL_SURGERY;

    fn chain_ending_in(statement: &str) -> Vec<ProofNode> {
        vec![ProofNode::new(statement, vec![], "kb_match:x", "inference")]
    }

    #[test]
    fn test_empty_chain_never_verifies() {
        assert!(!verify_chain(&[], GOAL_SURGERY));
        assert!(!verify_chain(&[], GOAL_DECISION));
    }

    #[test]
    fn test_specific_goal_requires_exact_match() {
        let chain = chain_ending_in("perform_surgery_now");
        assert!(verify_chain(&chain, GOAL_SURGERY));

        let chain = chain_ending_in(ICU_TRANSFER);
        assert!(!verify_chain(&chain, GOAL_SURGERY));
    }

    #[test]
    fn test_specific_goal_accepts_negation() {
        let chain = chain_ending_in("not perform_surgery_now");
        assert!(verify_chain(&chain, GOAL_SURGERY));
    }

    #[test]
    fn test_comparison_trims_and_case_folds() {
        let chain = chain_ending_in("  Perform_Surgery_Now  ");
        assert!(verify_chain(&chain, GOAL_SURGERY));
    }

    #[test]
    fn test_generic_goal_accepts_any_concrete_conclusion() {
        let chain = chain_ending_in(ICU_TRANSFER);
        assert!(verify_chain(&chain, GOAL_DECISION));
    }

    #[test]
    fn test_generic_goal_rejects_sentinel() {
        let chain = chain_ending_in(INSUFFICIENT_EVIDENCE);
        assert!(!verify_chain(&chain, GOAL_DECISION));
    }
}

//! Ethics/legal boundary gate

use regex::RegexBuilder;
use vina_domain::{BoundaryViolation, ProofNode, ViolationCategory};

/// Harm patterns, checked in order; first match wins.
/// These are deliberately minimal placeholders and must not be expanded.
const HARM_PATTERNS: [&str; 3] = [
    r"gây\s+hại|tấn\s+công|chế\s+tạo\s+vũ\s+khí",
    r"tự\s+tử|tự\s+sát|ma\s+túy|chất\s+độc",
    r"hack|crack|bypass|vượt\s+qua\s+bảo\s+mật",
];

/// Blocking ethics/legal gate
///
/// Produces at most one violation per evaluation. Any violation causes the
/// pipeline to short-circuit into a refusal, discarding the proof chain.
#[derive(Debug, Clone)]
pub struct EthicsFilter {
    harm_patterns: Vec<regex::Regex>,
}

impl EthicsFilter {
    /// Compile the fixed harm-pattern list
    pub fn new() -> Self {
        let harm_patterns = HARM_PATTERNS
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .expect("harm pattern compiles")
            })
            .collect();
        Self { harm_patterns }
    }

    /// Check the input text and the chain's evidence sources
    ///
    /// Step 1: the input against the ordered harm patterns (category
    /// `Ethics`, severity 1.0). Step 2: every evidence source across every
    /// node for the substring "private" (category `Legal`, severity 0.9).
    pub fn check(&self, text: &str, proof_chain: &[ProofNode]) -> Option<BoundaryViolation> {
        for pattern in &self.harm_patterns {
            if pattern.is_match(text) {
                return Some(BoundaryViolation::new(
                    ViolationCategory::Ethics,
                    format!("Matched harm pattern: {}", pattern.as_str()),
                    1.0,
                ));
            }
        }

        for node in proof_chain {
            for evidence in &node.evidence {
                if evidence.source.to_lowercase().contains("private") {
                    return Some(BoundaryViolation::new(
                        ViolationCategory::Legal,
                        "Uses restricted/private source",
                        0.9,
                    ));
                }
            }
        }

        None
    }
}

impl Default for EthicsFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vina_domain::{Evidence, EvidenceKind};

    #[test]
    fn test_violence_pattern() {
        let filter = EthicsFilter::new();
        let v = filter.check("tấn công mạng vào hệ thống bệnh viện", &[]).unwrap();
        assert_eq!(v.category, ViolationCategory::Ethics);
        assert_eq!(v.severity, 1.0);
        assert!(v.reason.contains("Matched harm pattern"));
    }

    #[test]
    fn test_self_harm_pattern() {
        let filter = EthicsFilter::new();
        let v = filter.check("cách tự tử nhanh nhất", &[]).unwrap();
        assert_eq!(v.category, ViolationCategory::Ethics);
    }

    #[test]
    fn test_security_bypass_pattern_is_case_insensitive() {
        let filter = EthicsFilter::new();
        assert!(filter.check("HACK the hospital system", &[]).is_some());
        assert!(filter.check("Bypass security checks", &[]).is_some());
    }

    #[test]
    fn test_private_source_scan() {
        let filter = EthicsFilter::new();
        let node = ProofNode::new(
            "statement",
            vec![Evidence::new("leaked data", "Private Registry 2021", EvidenceKind::Other, 0.9)],
            "kb_match:x",
            "Private Registry 2021",
        );
        let v = filter.check("hôm nay trời đẹp", &[node]).unwrap();
        assert_eq!(v.category, ViolationCategory::Legal);
        assert_eq!(v.severity, 0.9);
    }

    #[test]
    fn test_harm_pattern_wins_over_source_scan() {
        let filter = EthicsFilter::new();
        let node = ProofNode::new(
            "statement",
            vec![Evidence::new("x", "private", EvidenceKind::Other, 0.9)],
            "kb_match:x",
            "private",
        );
        let v = filter.check("chế tạo vũ khí", &[node]).unwrap();
        assert_eq!(v.category, ViolationCategory::Ethics);
    }

    #[test]
    fn test_clean_input_passes() {
        let filter = EthicsFilter::new();
        assert!(filter.check("đau ngực kéo dài hơn 20 phút", &[]).is_none());
    }
}

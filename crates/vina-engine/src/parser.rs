//! Pattern-based problem parsing
//!
//! This is literal phrase matching, not natural-language understanding;
//! the trigger phrases and entity patterns are fixed.

use regex::{Regex, RegexBuilder};

/// Goal symbol set when the input asks for immediate surgery
pub const GOAL_SURGERY: &str = "perform_surgery_now";

/// Generic goal symbol for everything else
pub const GOAL_DECISION: &str = "decision";

/// Structured form of an inbound problem statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedProblem {
    /// The original input, untouched
    pub raw_text: String,
    /// Goal symbol ([`GOAL_SURGERY`] or [`GOAL_DECISION`])
    pub goal: String,
    /// Symptom/risk-factor phrases extracted from the input
    pub entities: Vec<String>,
    /// Duplicate of `entities`, carried under its observed name
    pub observations: Vec<String>,
}

/// Parses free text into a [`ParsedProblem`]
#[derive(Debug, Clone)]
pub struct Parser {
    surgery_trigger: Regex,
    entity_pattern: Regex,
}

impl Parser {
    /// Compile the fixed trigger and entity patterns
    pub fn new() -> Self {
        let surgery_trigger = RegexBuilder::new(r"phẫu\s+thuật|phẫu thuật ngay|cần phẫu thuật")
            .case_insensitive(true)
            .build()
            .expect("surgery trigger compiles");
        let entity_pattern =
            RegexBuilder::new(r"triệu chứng\s+[A-Z]|yếu tố\s+nguy\s+cơ\s+[A-Z]|triệu chứng\s+\w+")
                .case_insensitive(true)
                .build()
                .expect("entity pattern compiles");
        Self {
            surgery_trigger,
            entity_pattern,
        }
    }

    /// Parse a problem statement
    pub fn parse(&self, problem: &str) -> ParsedProblem {
        let goal = if self.surgery_trigger.is_match(problem) {
            GOAL_SURGERY
        } else {
            GOAL_DECISION
        };

        let entities: Vec<String> = self
            .entity_pattern
            .find_iter(problem)
            .map(|m| m.as_str().to_string())
            .collect();

        ParsedProblem {
            raw_text: problem.to_string(),
            goal: goal.to_string(),
            observations: entities.clone(),
            entities,
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

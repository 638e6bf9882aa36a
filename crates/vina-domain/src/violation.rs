//! Boundary violations raised by the ethics/legal gate

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which boundary a violation falls under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationCategory {
    /// Harmful-intent input (weapon-making, self-harm, security bypass)
    Ethics,
    /// Restricted or private evidence source
    Legal,
}

impl fmt::Display for ViolationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationCategory::Ethics => f.write_str("Ethics"),
            ViolationCategory::Legal => f.write_str("Legal"),
        }
    }
}

/// A single boundary violation
///
/// At most one is produced per evaluation; its presence short-circuits the
/// pipeline into a refusal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryViolation {
    /// Violation category
    pub category: ViolationCategory,
    /// Human-readable reason
    pub reason: String,
    /// Severity in [0, 1]
    pub severity: f64,
}

impl BoundaryViolation {
    /// Create a new violation
    pub fn new(category: ViolationCategory, reason: impl Into<String>, severity: f64) -> Self {
        Self {
            category,
            reason: reason.into(),
            severity,
        }
    }
}

//! Vina Decision Engine
//!
//! A linear, in-memory proof-chain evaluator. One evaluation runs the
//! pipeline: parse → knowledge-base query → proof-chain construction →
//! ethics gate → terminal-statement check + cross-validation → confidence
//! thresholding → decision assembly.
//!
//! The engine is deterministic and performs no I/O; a fresh instance is
//! cheap enough to build per request.
//!
//! # Examples
//!
//! ```
//! use vina_engine::{medical_knowledge, DecisionEngine};
//!
//! let engine = DecisionEngine::new(medical_knowledge());
//! let decision = engine.solve("hôm nay trời đẹp");
//! assert!(!decision.answer);
//! assert_eq!(decision.verification_code, "INSUFFICIENT");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod chain;
mod confidence;
mod engine;
mod ethics;
mod knowledge;
mod medical;
mod parser;
mod prover;

pub use chain::{build_chain, ICU_TRANSFER, INSUFFICIENT_EVIDENCE};
pub use confidence::{calculate_confidence, cross_validate};
pub use engine::{DecisionEngine, DEFAULT_MIN_CONFIDENCE};
pub use ethics::EthicsFilter;
pub use knowledge::{Fact, FactId, KnowledgeBase};
pub use medical::medical_knowledge;
pub use parser::{ParsedProblem, Parser, GOAL_DECISION, GOAL_SURGERY};
pub use prover::verify_chain;

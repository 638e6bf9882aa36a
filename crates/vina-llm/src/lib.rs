//! Vina LLM Provider Layer
//!
//! Client for the hosted chat-completion API (Groq Cloud, OpenAI-compatible
//! wire format) plus the static model registry the service exposes.
//!
//! # Examples
//!
//! ```
//! use vina_llm::{chat_models, resolve_model, DEFAULT_CHAT_MODEL};
//!
//! assert!(chat_models().iter().any(|m| m.id == DEFAULT_CHAT_MODEL));
//! assert_eq!(resolve_model(None).unwrap(), DEFAULT_CHAT_MODEL);
//! ```

#![warn(missing_docs)]

pub mod groq;
pub mod models;

use thiserror::Error;

pub use groq::{ChatMessage, GroqClient};
pub use models::{chat_models, resolve_model, ChatModel, DEFAULT_CHAT_MODEL};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the provider
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available on the provider
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Model id not in the local registry
    #[error("Unknown model: {0}")]
    UnknownModel(String),
}

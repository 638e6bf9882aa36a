//! Static chat-model registry
//!
//! Model ids are kept as plain strings resolved at request time; nothing
//! provider-specific is instantiated at startup.

use crate::LlmError;
use serde::Serialize;

/// Default model for chat requests
pub const DEFAULT_CHAT_MODEL: &str = "llama-3.1-8b-instant";

/// A selectable chat model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatModel {
    /// Provider model id
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
}

/// The models this service offers
pub fn chat_models() -> &'static [ChatModel] {
    &[
        ChatModel {
            id: "llama-3.3-70b-versatile",
            name: "Groq LLaMA 3.3 70B Versatile",
            description: "Fast, high-accuracy Groq Cloud model (≈ GPT-4 Turbo)",
        },
        ChatModel {
            id: "llama-3.1-8b-instant",
            name: "Groq LLaMA 3.1 8B Instant",
            description: "Lightweight and extremely fast model for quick replies",
        },
    ]
}

/// Resolve a requested model id against the registry
///
/// `None` falls back to [`DEFAULT_CHAT_MODEL`]; an id outside the registry
/// is rejected rather than forwarded to the provider.
pub fn resolve_model(requested: Option<&str>) -> Result<&'static str, LlmError> {
    match requested {
        None => Ok(DEFAULT_CHAT_MODEL),
        Some(id) => chat_models()
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.id)
            .ok_or_else(|| LlmError::UnknownModel(id.to_string())),
    }
}

//! Vina Server
//!
//! HTTP service exposing the decision evaluator, the hosted-LLM forwarding
//! endpoint, the model registry, and guest session issuance.

#![warn(missing_docs)]

pub mod config;
pub mod conversions;
pub mod handlers;
pub mod session;

use config::ServerConfig;
use handlers::{create_router, AppState};
use session::SessionManager;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use vina_llm::GroqClient;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP server
///
/// Initializes tracing, builds the shared state from the validated
/// configuration, and serves until shutdown.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Vina server");
    info!("Bind address: {}", config.bind_addr());
    info!("Session token expiry: {} seconds", config.token_expiry_secs);
    info!("Provider endpoint: {}", config.groq_endpoint);

    let session_manager = Arc::new(SessionManager::new(
        &config.auth_secret,
        config.token_expiry_secs,
    ));
    let llm = Arc::new(GroqClient::new(&config.groq_endpoint, &config.groq_api_key));

    let state = AppState {
        session_manager,
        llm,
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config() {
        let config = ServerConfig::default_test_config();
        assert_eq!(config.token_expiry_secs, 3600);
        assert!(config.validate().is_ok());
    }
}

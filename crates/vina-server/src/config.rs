//! Service configuration
//!
//! Loads settings from a TOML file or from environment variables, and
//! validates required fields at startup so a misconfigured deployment
//! fails immediately with every missing key named.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// One or more required fields are missing
    #[error("Missing required configuration: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// A field has an unusable value
    #[error("Invalid configuration value for {field}: {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// What is wrong with it
        message: String,
    },
}

/// Service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g. "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Secret for signing session tokens
    #[serde(default)]
    pub auth_secret: String,

    /// Session token expiry in seconds (default: 3600 = 1 hour)
    #[serde(default = "default_token_expiry")]
    pub token_expiry_secs: u64,

    /// Hosted LLM provider API key
    #[serde(default)]
    pub groq_api_key: String,

    /// Hosted LLM provider endpoint
    #[serde(default = "default_groq_endpoint")]
    pub groq_endpoint: String,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    3000
}

fn default_token_expiry() -> u64 {
    3600
}

fn default_groq_endpoint() -> String {
    vina_llm::groq::DEFAULT_ENDPOINT.to_string()
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// Required: `AUTH_SECRET`, `GROQ_API_KEY`. Optional with defaults:
    /// `VINA_BIND_ADDRESS`, `VINA_BIND_PORT`, `VINA_TOKEN_EXPIRY_SECS`,
    /// `GROQ_ENDPOINT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = ServerConfig {
            bind_address: std::env::var("VINA_BIND_ADDRESS")
                .unwrap_or_else(|_| default_bind_address()),
            bind_port: match std::env::var("VINA_BIND_PORT") {
                Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                    field: "VINA_BIND_PORT".to_string(),
                    message: format!("'{}' is not a port number", raw),
                })?,
                Err(_) => default_bind_port(),
            },
            auth_secret: std::env::var("AUTH_SECRET").unwrap_or_default(),
            token_expiry_secs: match std::env::var("VINA_TOKEN_EXPIRY_SECS") {
                Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                    field: "VINA_TOKEN_EXPIRY_SECS".to_string(),
                    message: format!("'{}' is not a number of seconds", raw),
                })?,
                Err(_) => default_token_expiry(),
            },
            groq_api_key: std::env::var("GROQ_API_KEY").unwrap_or_default(),
            groq_endpoint: std::env::var("GROQ_ENDPOINT")
                .unwrap_or_else(|_| default_groq_endpoint()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check required fields, collecting every missing key
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();
        if self.auth_secret.trim().is_empty() {
            missing.push("auth_secret (AUTH_SECRET)".to_string());
        }
        if self.groq_api_key.trim().is_empty() {
            missing.push("groq_api_key (GROQ_API_KEY)".to_string());
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingFields(missing))
        }
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 3000,
            auth_secret: "test-secret-key-do-not-use-in-production".to_string(),
            token_expiry_secs: 3600,
            groq_api_key: "test-api-key".to_string(),
            groq_endpoint: "http://127.0.0.1:9".to_string(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

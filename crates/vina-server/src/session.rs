//! Guest session tokens
//!
//! Authentication is optional for this service; browsing is anonymous and
//! a guest identity is a JWT with a `guest-<n>` subject. Tokens are signed
//! with the configured secret and expire after the configured interval.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// Session management error
#[derive(Debug, Error)]
pub enum SessionError {
    /// JWT encoding failed
    #[error("Failed to encode JWT: {0}")]
    JwtEncode(#[from] jsonwebtoken::errors::Error),

    /// Token expired
    #[error("Session token expired")]
    TokenExpired,

    /// Invalid token
    #[error("Invalid session token")]
    InvalidToken,
}

/// JWT claims for session tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Session subject (e.g. "guest-42")
    pub sub: String,

    /// Token expiration timestamp (Unix epoch)
    pub exp: u64,

    /// Issued at timestamp (Unix epoch)
    pub iat: u64,
}

/// Whether a subject is a guest identity (`guest-<digits>`)
pub fn is_guest_subject(subject: &str) -> bool {
    subject
        .strip_prefix("guest-")
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}

/// Issues and validates guest session tokens
pub struct SessionManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_secs: u64,
    guest_counter: AtomicU64,
}

impl SessionManager {
    /// Create a new session manager with the given secret and expiry
    pub fn new(auth_secret: &str, token_expiry_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(auth_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(auth_secret.as_bytes()),
            token_expiry_secs,
            guest_counter: AtomicU64::new(1),
        }
    }

    /// Configured token lifetime in seconds
    pub fn token_expiry_secs(&self) -> u64 {
        self.token_expiry_secs
    }

    /// Issue a token for a fresh guest identity
    ///
    /// Returns the signed token and the `guest-<n>` subject it carries.
    pub fn issue_guest(&self) -> Result<(String, String), SessionError> {
        let n = self.guest_counter.fetch_add(1, Ordering::Relaxed);
        let subject = format!("guest-{}", n);
        let token = self.generate_token(&subject)?;
        Ok((token, subject))
    }

    /// Generate a session token for the given subject
    pub fn generate_token(&self, subject: &str) -> Result<String, SessionError> {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs();

        let claims = SessionClaims {
            sub: subject.to_string(),
            exp: now + self.token_expiry_secs,
            iat: now,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Validate a session token and extract its claims
    pub fn validate_token(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let validation = Validation::default();
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::TokenExpired,
                _ => SessionError::InvalidToken,
            })?;

        Ok(token_data.claims)
    }
}

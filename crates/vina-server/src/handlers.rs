//! HTTP request handlers
//!
//! Implements the decision endpoint, LLM forwarding, the model registry,
//! guest sessions, and liveness probes using axum.

use crate::conversions::DecisionView;
use crate::session::{SessionError, SessionManager};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};
use vina_engine::{medical_knowledge, DecisionEngine};
use vina_llm::{chat_models, resolve_model, ChatMessage, GroqClient, LlmError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Session manager for guest JWT operations
    pub session_manager: Arc<SessionManager>,
    /// Hosted LLM provider client
    pub llm: Arc<GroqClient>,
}

/// Decision evaluation request
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    /// The problem statement to evaluate
    #[serde(default)]
    pub problem: Option<String>,
}

/// LLM generation request
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Prompt text
    #[serde(default)]
    pub prompt: Option<String>,
    /// Optional model id (falls back to the registry default)
    #[serde(default)]
    pub model: Option<String>,
}

/// LLM generation response
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// Model that produced the text
    pub model: String,
    /// Generated text
    pub text: String,
}

/// Guest session response
#[derive(Debug, Serialize)]
pub struct GuestSessionResponse {
    /// Signed session token
    pub token: String,
    /// Guest subject the token carries
    pub user: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Malformed or incomplete request
    BadRequest(String),
    /// Session-related error
    SessionError(SessionError),
    /// Provider-related error
    LlmError(LlmError),
    /// Internal server error
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::SessionError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::LlmError(LlmError::UnknownModel(id)) => {
                (StatusCode::BAD_REQUEST, format!("Unknown model: {}", id))
            }
            AppError::LlmError(LlmError::RateLimitExceeded) => {
                (StatusCode::TOO_MANY_REQUESTS, "Rate limit exceeded".to_string())
            }
            AppError::LlmError(e) => {
                error!("provider request failed: {}", e);
                (StatusCode::BAD_GATEWAY, "Upstream provider error".to_string())
            }
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred".to_string(),
            ),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        AppError::SessionError(e)
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::LlmError(e)
    }
}

/// POST /api/chat - Evaluate a problem statement
///
/// Builds a fresh evaluator over the built-in fact set for each request;
/// nothing is shared across requests, so concurrent evaluations are fully
/// independent.
async fn evaluate(
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<DecisionView>, AppError> {
    let problem = request.problem.unwrap_or_default();
    if problem.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Problem statement is required".to_string(),
        ));
    }

    let engine = DecisionEngine::new(medical_knowledge());
    let decision = engine.solve(&problem);
    debug!(
        refused = decision.refused,
        code = %decision.verification_code,
        "evaluation complete"
    );

    Ok(Json(DecisionView::from(decision)))
}

/// POST /api/generate - Forward a prompt to the hosted LLM
async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let prompt = request.prompt.unwrap_or_default();
    if prompt.trim().is_empty() {
        return Err(AppError::BadRequest("Prompt is required".to_string()));
    }

    let model = resolve_model(request.model.as_deref())?;
    let text = state.llm.chat(model, &[ChatMessage::user(prompt)]).await?;

    Ok(Json(GenerateResponse {
        model: model.to_string(),
        text,
    }))
}

/// GET /api/models - The static chat-model registry
async fn models() -> Json<&'static [vina_llm::ChatModel]> {
    Json(chat_models())
}

/// GET /api/auth/guest - Issue a guest session token
async fn guest_session(
    State(state): State<AppState>,
) -> Result<Json<GuestSessionResponse>, AppError> {
    let (token, user) = state.session_manager.issue_guest()?;
    Ok(Json(GuestSessionResponse {
        token,
        user,
        expires_in: state.session_manager.token_expiry_secs(),
    }))
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}

/// GET /ping - Plain-text liveness probe for browser test harnesses
async fn ping() -> &'static str {
    "pong"
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/api/chat", post(evaluate))
        .route("/api/generate", post(generate))
        .route("/api/models", get(models))
        .route("/api/auth/guest", get(guest_session))
        .route("/health", get(health_check))
        .route("/ping", get(ping))
        .with_state(state)
}

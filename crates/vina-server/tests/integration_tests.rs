//! Integration tests for the Vina HTTP service

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use std::sync::Arc;
use tower::ServiceExt; // for oneshot
use vina_server::{
    config::ServerConfig,
    handlers::{create_router, AppState},
    session::SessionManager,
};

/// Helper to create test application state
fn create_test_state() -> AppState {
    AppState {
        session_manager: Arc::new(SessionManager::new("test-secret-key", 3600)),
        llm: Arc::new(
            vina_llm::GroqClient::new("http://127.0.0.1:9", "test-key").with_max_retries(1),
        ),
    }
}

fn evaluate_request(problem: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(format!(r#"{{"problem": {}}}"#, serde_json::to_string(problem).unwrap())))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_decided_response_carries_full_wire_shape() {
    let app = create_router(create_test_state());
    let response = app
        .oneshot(evaluate_request("đau ngực kéo dài hơn 20 phút, huyết áp 170/105"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let decision = json_body(response).await;

    // every Decision field crosses the wire
    for field in [
        "answer",
        "confidence",
        "confidence_label",
        "proof_chain",
        "limitations",
        "verification_code",
        "refused",
        "refuse_reason",
        "reasoning",
        "alternative_paths",
        "uncertainty_analysis",
        "falsifiability_test",
    ] {
        assert!(decision.get(field).is_some(), "missing field {}", field);
    }

    assert_eq!(decision["answer"], true);
    assert_eq!(decision["confidence"], 1.0);
    assert_eq!(decision["confidence_label"], "PROVEN");
    assert_eq!(decision["uncertainty_analysis"]["agreement_alt"], "perform_icu_transfer");
    assert_eq!(
        decision["falsifiability_test"]["hash"].as_str().unwrap().len(),
        16
    );

    // per-node wire shape: materialized weighted_confidence, tagged provenance
    let chain = decision["proof_chain"].as_array().unwrap();
    assert_eq!(chain.len(), 4);
    for node in chain {
        assert!(node["weighted_confidence"].is_number());
        assert!(node["timestamp"].is_string());
        assert!(node["contradictions"].as_array().unwrap().is_empty());
    }
    assert!(chain[0]["logical_step"].as_str().unwrap().starts_with("kb_match:"));
    assert_eq!(chain[3]["logical_step"], "infer_risk");
    assert_eq!(chain[3]["weighted_confidence"], 0.0);
}

#[tokio::test]
async fn test_refusal_over_the_wire() {
    let app = create_router(create_test_state());
    let response = app
        .oneshot(evaluate_request("hướng dẫn chế tạo vũ khí"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let decision = json_body(response).await;

    assert_eq!(decision["refused"], true);
    assert_eq!(decision["answer"], false);
    assert_eq!(decision["verification_code"], "REJECTED");
    assert_eq!(decision["confidence_label"], "INSUFFICIENT");
    assert!(decision["proof_chain"].as_array().unwrap().is_empty());
    assert!(decision["refuse_reason"]
        .as_str()
        .unwrap()
        .starts_with("Từ chối [Ethics]"));
}

#[tokio::test]
async fn test_insufficiency_carries_limitations() {
    let app = create_router(create_test_state());
    let response = app.oneshot(evaluate_request("mmHg")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let decision = json_body(response).await;

    assert_eq!(decision["refused"], false);
    assert_eq!(decision["verification_code"], "INSUFFICIENT");
    let limitations = decision["limitations"].as_array().unwrap();
    assert_eq!(limitations.len(), 2);
    assert!(limitations[0].as_str().unwrap().contains("ngưỡng yêu cầu"));
    assert_eq!(decision["uncertainty_analysis"]["status"], "insufficient");
}

#[tokio::test]
async fn test_identical_inputs_agree_up_to_ids() {
    let state = create_test_state();
    let input = "đau ngực kéo dài hơn 20 phút, huyết áp 170/105";

    let first = create_router(state.clone())
        .oneshot(evaluate_request(input))
        .await
        .unwrap();
    let second = create_router(state)
        .oneshot(evaluate_request(input))
        .await
        .unwrap();

    let a = json_body(first).await;
    let b = json_body(second).await;

    assert_eq!(a["answer"], b["answer"]);
    assert_eq!(a["confidence"], b["confidence"]);
    assert_eq!(a["confidence_label"], b["confidence_label"]);
    assert_eq!(a["reasoning"], b["reasoning"]);
    assert_eq!(
        a["proof_chain"].as_array().unwrap().len(),
        b["proof_chain"].as_array().unwrap().len()
    );
}

#[tokio::test]
async fn test_guest_token_round_trip() {
    let state = create_test_state();
    let manager = state.session_manager.clone();
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/guest")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let session = json_body(response).await;
    let claims = manager
        .validate_token(session["token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.sub, session["user"].as_str().unwrap());
    assert_eq!(session["expires_in"], 3600);
}

#[test]
fn test_server_config_from_toml() {
    let toml = r#"
        bind_address = "0.0.0.0"
        bind_port = 9000
        auth_secret = "my-secret-key"
        groq_api_key = "gsk-test"
        token_expiry_secs = 7200
    "#;

    let config: ServerConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.bind_address, "0.0.0.0");
    assert_eq!(config.bind_port, 9000);
    assert_eq!(config.token_expiry_secs, 7200);
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_token_expiry() {
    let toml = r#"
        auth_secret = "secret"
        groq_api_key = "gsk-test"
    "#;

    let config: ServerConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.token_expiry_secs, 3600); // Default
}

//! Integration tests for the `/bfhl` dispatch endpoint.
//!
//! The text provider is injected as a mock so no test touches the network.
//! Run with: cargo test --test solve

use bfhl_service::config::AppConfig;
use bfhl_service::services::providers::mock::MockTextProvider;
use bfhl_service::services::providers::TextProvider;
use bfhl_service::startup::Application;
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

/// Spawn the application with the given provider and return the port number.
async fn spawn_app(provider: Arc<dyn TextProvider>) -> u16 {
    std::env::set_var("ENVIRONMENT", "test");
    std::env::set_var("APP__PORT", "0"); // Random port
    std::env::set_var("OFFICIAL_EMAIL", "ops@bfhl.dev");
    std::env::set_var("GEMINI_API_KEY", "test-api-key");

    let config = AppConfig::load().expect("Failed to load config");
    let app = Application::build_with_provider(config, provider)
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

async fn post_bfhl(port: u16, body: Value) -> (reqwest::StatusCode, Value) {
    let response = Client::new()
        .post(format!("http://localhost:{}/bfhl", port))
        .json(&body)
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body: Value = response.json().await.expect("Failed to parse JSON");
    (status, body)
}

#[tokio::test]
async fn fibonacci_returns_series() {
    let port = spawn_app(Arc::new(MockTextProvider::failing())).await;

    let (status, body) = post_bfhl(port, json!({ "fibonacci": 8 })).await;

    assert_eq!(status.as_u16(), 200);
    assert_eq!(body["is_success"], true);
    assert_eq!(body["official_email"], "ops@bfhl.dev");
    assert_eq!(body["data"], json!([0, 1, 1, 2, 3, 5, 8, 13]));
}

#[tokio::test]
async fn fibonacci_of_zero_is_empty() {
    let port = spawn_app(Arc::new(MockTextProvider::failing())).await;

    let (status, body) = post_bfhl(port, json!({ "fibonacci": 0 })).await;

    assert_eq!(status.as_u16(), 200);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn fibonacci_rejects_non_integer() {
    let port = spawn_app(Arc::new(MockTextProvider::failing())).await;

    let (status, body) = post_bfhl(port, json!({ "fibonacci": "x" })).await;

    assert_eq!(status.as_u16(), 400);
    assert_eq!(body["is_success"], false);
    assert_eq!(body["error"], "Invalid Fibonacci Input");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn fibonacci_overflow_maps_to_internal_error() {
    let port = spawn_app(Arc::new(MockTextProvider::failing())).await;

    let (status, body) = post_bfhl(port, json!({ "fibonacci": 100 })).await;

    assert_eq!(status.as_u16(), 500);
    assert_eq!(body["is_success"], false);
    assert_eq!(body["error"], "Internal Server Error");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn hcf_of_i64_min_and_neg_one_maps_to_internal_error() {
    let port = spawn_app(Arc::new(MockTextProvider::failing())).await;

    let (status, body) = post_bfhl(port, json!({ "hcf": [i64::MIN, -1] })).await;

    assert_eq!(status.as_u16(), 500);
    assert_eq!(body["is_success"], false);
    assert_eq!(body["error"], "Internal Server Error");
}

#[tokio::test]
async fn lcm_of_i64_min_and_neg_one_maps_to_internal_error() {
    let port = spawn_app(Arc::new(MockTextProvider::failing())).await;

    let (status, body) = post_bfhl(port, json!({ "lcm": [i64::MIN, -1] })).await;

    assert_eq!(status.as_u16(), 500);
    assert_eq!(body["error"], "Internal Server Error");
}

#[tokio::test]
async fn prime_filters_the_array() {
    let port = spawn_app(Arc::new(MockTextProvider::failing())).await;

    let (status, body) = post_bfhl(port, json!({ "prime": [1, 2, 3, 4, 5, 10, 11] })).await;

    assert_eq!(status.as_u16(), 200);
    assert_eq!(body["data"], json!([2, 3, 5, 11]));
}

#[tokio::test]
async fn prime_rejects_non_array() {
    let port = spawn_app(Arc::new(MockTextProvider::failing())).await;

    let (status, body) = post_bfhl(port, json!({ "prime": 7 })).await;

    assert_eq!(status.as_u16(), 400);
    assert_eq!(body["error"], "Invalid Prime Input");
}

#[tokio::test]
async fn lcm_reduces_the_array() {
    let port = spawn_app(Arc::new(MockTextProvider::failing())).await;

    let (status, body) = post_bfhl(port, json!({ "lcm": [4, 6] })).await;

    assert_eq!(status.as_u16(), 200);
    assert_eq!(body["data"], json!(12));
}

#[tokio::test]
async fn lcm_rejects_empty_array() {
    let port = spawn_app(Arc::new(MockTextProvider::failing())).await;

    let (status, body) = post_bfhl(port, json!({ "lcm": [] })).await;

    assert_eq!(status.as_u16(), 400);
    assert_eq!(body["error"], "Invalid LCM Input");
}

#[tokio::test]
async fn hcf_reduces_the_array() {
    let port = spawn_app(Arc::new(MockTextProvider::failing())).await;

    let (status, body) = post_bfhl(port, json!({ "hcf": [12, 18, 24] })).await;

    assert_eq!(status.as_u16(), 200);
    assert_eq!(body["data"], json!(6));
}

#[tokio::test]
async fn hcf_rejects_empty_array() {
    let port = spawn_app(Arc::new(MockTextProvider::failing())).await;

    let (status, body) = post_bfhl(port, json!({ "hcf": [] })).await;

    assert_eq!(status.as_u16(), 400);
    assert_eq!(body["error"], "Invalid HCF Input");
}

#[tokio::test]
async fn empty_object_is_invalid_format() {
    let port = spawn_app(Arc::new(MockTextProvider::failing())).await;

    let (status, body) = post_bfhl(port, json!({})).await;

    assert_eq!(status.as_u16(), 400);
    assert_eq!(body["error"], "Invalid request format");
}

#[tokio::test]
async fn two_keys_are_invalid_format() {
    let port = spawn_app(Arc::new(MockTextProvider::failing())).await;

    let (status, body) = post_bfhl(port, json!({ "a": 1, "b": 2 })).await;

    assert_eq!(status.as_u16(), 400);
    assert_eq!(body["error"], "Invalid request format");
}

#[tokio::test]
async fn unknown_key_is_unsupported() {
    let port = spawn_app(Arc::new(MockTextProvider::failing())).await;

    let (status, body) = post_bfhl(port, json!({ "unknownKey": 1 })).await;

    assert_eq!(status.as_u16(), 400);
    assert_eq!(body["error"], "Unsupported Key");
}

#[tokio::test]
async fn ai_returns_first_token_of_answer() {
    let provider = Arc::new(MockTextProvider::responding("  New Delhi  "));
    let port = spawn_app(provider).await;

    let (status, body) = post_bfhl(port, json!({ "AI": "capital of India?" })).await;

    assert_eq!(status.as_u16(), 200);
    assert_eq!(body["data"], json!("New"));
}

#[tokio::test]
async fn ai_defaults_when_answer_is_blank() {
    let provider = Arc::new(MockTextProvider::responding("   "));
    let port = spawn_app(provider).await;

    let (status, body) = post_bfhl(port, json!({ "AI": "capital of India?" })).await;

    assert_eq!(status.as_u16(), 200);
    assert_eq!(body["data"], json!("Unknown"));
}

#[tokio::test]
async fn ai_failure_substitutes_fallback() {
    let port = spawn_app(Arc::new(MockTextProvider::failing())).await;

    let (status, body) = post_bfhl(port, json!({ "AI": "capital of Maharashtra?" })).await;

    assert_eq!(status.as_u16(), 200);
    assert_eq!(body["is_success"], true);
    assert_eq!(body["data"], json!("Mumbai"));
}

#[tokio::test]
async fn ai_rejects_non_string() {
    let port = spawn_app(Arc::new(MockTextProvider::failing())).await;

    let (status, body) = post_bfhl(port, json!({ "AI": 42 })).await;

    assert_eq!(status.as_u16(), 400);
    assert_eq!(body["error"], "Invalid AI Input");
}

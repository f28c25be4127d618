//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use bracketeer_core::clock::Clock;
use bracketeer_core::entropy::EntropySource;
use bracketeer_engine::domain::seed::SeedPolicy;
use bracketeer_test_support::{FixedClock, FixedEntropy};
use http_body_util::BodyExt;
use tower::ServiceExt;

use bracketeer_api::state::AppState;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Local, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build the full app router with deterministic clock and entropy. Every
/// request against it derives the same seed for the same caller seed.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(FixedEntropy { pid: 1, fill: 0 }), SeedPolicy::Mixed)
}

/// Build the full app router with a custom entropy source and seed policy.
pub fn build_test_app_with(entropy: Arc<dyn EntropySource>, seed_policy: SeedPolicy) -> Router {
    let app_state = AppState::new(fixed_clock(), entropy, seed_policy);
    bracketeer_api::router(app_state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

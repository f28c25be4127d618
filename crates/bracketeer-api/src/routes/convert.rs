//! Routes for text conversion.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use bracketeer_engine::application::command_handlers;
use bracketeer_engine::domain::commands::ConvertText;
use bracketeer_engine::domain::conversion::ConversionResult;
use bracketeer_engine::domain::probability::validate_percent;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /convert.
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    /// Text to rewrite.
    pub text: String,
    /// Fraction in `[0, 1]` or percentage in `(1, 100]`.
    pub percent: f64,
    /// Optional seed for reproducibility.
    #[serde(default)]
    pub seed: Option<i64>,
    /// `0` = words, `1` = `<...>` chunks.
    #[serde(default)]
    pub mode: i64,
}

/// Response body returned after a conversion.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    /// The rewritten text.
    pub converted: String,
    /// The request's `percent`, unchanged.
    pub percent: f64,
    /// Words (mode 0) or chunks (mode 1) seen.
    pub words_total: usize,
    /// Words or chunks replaced.
    pub words_replaced: usize,
    /// The request's mode, unchanged.
    pub mode: i64,
}

impl From<ConversionResult> for ConvertResponse {
    fn from(result: ConversionResult) -> Self {
        Self {
            converted: result.converted,
            percent: result.percent,
            words_total: result.units_total,
            words_replaced: result.units_replaced,
            mode: result.mode,
        }
    }
}

/// POST /convert
#[instrument(skip(state, request), fields(mode = request.mode, chars = request.text.chars().count()))]
async fn convert(
    State(state): State<AppState>,
    Json(request): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
    validate_percent(request.percent)?;

    let command = ConvertText {
        correlation_id: Uuid::new_v4(),
        text: request.text,
        percent: request.percent,
        seed: request.seed,
        mode: request.mode,
    };

    info!(correlation_id = %command.correlation_id, "handling convert_text command");

    let result = command_handlers::handle_convert(&command, &state.seed_forge())?;

    info!(
        correlation_id = %command.correlation_id,
        words_total = result.units_total,
        words_replaced = result.units_replaced,
        "converted text"
    );

    Ok(Json(ConvertResponse::from(result)))
}

/// Returns the router for conversion. The `/api/convert` alias is the path
/// existing front ends call.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/convert", post(convert))
        .route("/api/convert", post(convert))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use bracketeer_core::clock::Clock;
    use bracketeer_core::entropy::EntropySource;
    use bracketeer_engine::domain::seed::SeedPolicy;
    use bracketeer_test_support::{FailingEntropy, FixedClock, FixedEntropy};
    use chrono::{Local, TimeZone};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app_state_with(entropy: Arc<dyn EntropySource>) -> AppState {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(
            Local.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        ));
        AppState::new(clock, entropy, SeedPolicy::Mixed)
    }

    fn test_app_state() -> AppState {
        app_state_with(Arc::new(FixedEntropy { pid: 1, fill: 0 }))
    }

    fn failing_app_state() -> AppState {
        app_state_with(Arc::new(FailingEntropy))
    }

    fn post(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    #[tokio::test]
    async fn test_convert_returns_200_with_counts() {
        // Arrange
        let app = router().with_state(test_app_state());
        let body = serde_json::json!({ "text": "foo bar", "percent": 100, "seed": 7 });

        // Act
        let response = app.oneshot(post("/convert", &body)).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["converted"], "] ]");
        assert_eq!(json["percent"], 100.0);
        assert_eq!(json["words_total"], 2);
        assert_eq!(json["words_replaced"], 2);
        assert_eq!(json["mode"], 0);
    }

    #[tokio::test]
    async fn test_api_alias_route_converts() {
        // Arrange
        let app = router().with_state(test_app_state());
        let body = serde_json::json!({ "text": "a <b> c", "percent": 1, "mode": 1 });

        // Act
        let response = app.oneshot(post("/api/convert", &body)).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["converted"], "a\u{a0}]\u{a0}c");
        assert_eq!(json["words_total"], 1);
        assert_eq!(json["words_replaced"], 1);
        assert_eq!(json["mode"], 1);
    }

    #[tokio::test]
    async fn test_convert_returns_400_for_out_of_range_percent() {
        // Arrange
        let app = router().with_state(test_app_state());
        let body = serde_json::json!({ "text": "foo", "percent": 150 });

        // Act
        let response = app.oneshot(post("/convert", &body)).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_convert_returns_422_for_missing_percent() {
        // Arrange
        let app = router().with_state(test_app_state());
        let body = serde_json::json!({ "text": "foo" });

        // Act
        let response = app.oneshot(post("/convert", &body)).await.unwrap();

        // Assert — Axum returns 422 for deserialization failures.
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_convert_returns_500_when_entropy_fails() {
        // Arrange
        let app = router().with_state(failing_app_state());
        let body = serde_json::json!({ "text": "foo", "percent": 50 });

        // Act
        let response = app.oneshot(post("/convert", &body)).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "entropy_unavailable");
    }
}

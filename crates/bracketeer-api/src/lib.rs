//! Bracketeer — HTTP surface for the text converter.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the application router without middleware.
pub fn router(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::info::router())
        .merge(routes::health::router())
        .merge(routes::convert::router())
        .with_state(app_state)
}

/// Builds the application router with tracing and CORS layers.
pub fn app(app_state: AppState, cors: CorsLayer) -> Router {
    router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

//! Bracketeer API server entry point.

use std::error::Error;
use std::sync::Arc;

use bracketeer_api::config::ServerConfig;
use bracketeer_api::state::AppState;
use bracketeer_core::clock::SystemClock;
use bracketeer_core::entropy::SystemEntropy;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Bracketeer API server");

    // Read configuration from environment.
    let config = ServerConfig::from_env()?;
    let cors = config.cors_layer()?;
    let addr = config.socket_addr()?;

    // Build application state.
    let app_state = AppState::new(
        Arc::new(SystemClock),
        Arc::new(SystemEntropy),
        config.seed_policy,
    );

    let app = bracketeer_api::app(app_state, cors);

    tracing::info!(seed_policy = ?config.seed_policy, "Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}

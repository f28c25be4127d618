//! Service description served at the root path.

use std::collections::BTreeMap;

use axum::{Json, Router, routing::get};
use bracketeer_engine::domain::probability::MAX_PERCENT;
use serde::Serialize;

use crate::state::AppState;

/// Help payload describing accepted parameters and modes.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    /// Service status.
    pub status: &'static str,
    /// Usage summary.
    pub message: &'static str,
    /// How `percent` is interpreted.
    pub percent_note: String,
    /// Mode selector to description.
    pub modes: BTreeMap<&'static str, &'static str>,
}

/// GET /
async fn info() -> Json<InfoResponse> {
    let modes = BTreeMap::from([
        ("0", "replace each word (letters, digits, underscore) with ']' when r <= p"),
        (
            "1",
            "scan <...> chunks; replace a chunk with ']' when r <= p, mark spaces with NBSP \
             outside brackets, then strip every remaining '<' and '>'",
        ),
    ]);

    Json(InfoResponse {
        status: "ok",
        message: "Use POST /convert with JSON {text, percent, seed?, mode?}",
        percent_note: format!(
            "percent accepts 0..1 (fraction) or 0..{MAX_PERCENT} (percentage)"
        ),
        modes,
    })
}

/// Returns the router for the service description.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(info))
}

// src/routes/health.rs
//! Health check endpoint for the fire-risk service.
//!
//! Used by container orchestrators and CI to verify the service answers
//! HTTP. Alongside the status it reports which reading source is active and
//! whether assessments are being persisted, without touching either.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::AppState;

/// JSON response body for the `/health` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    source: &'static str,
    persistence: bool,
}

/// Handle `GET /health`.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        source: state.config.source_name(),
        persistence: state.pool.is_some(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

//! Routes gateway: merges every subrouter and attaches the shared state.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::json;
use sqlx::PgPool;

use crate::{Config, FireRiskError};

mod health;
mod score;
mod stations;
mod summary;

// ---

/// State shared by every handler. The pool is absent when persistence is
/// disabled.
#[derive(Debug, Clone)]
pub struct AppState {
    // ---
    pub pool: Option<PgPool>,
    pub config: Config,
}

impl AppState {
    pub fn new(pool: Option<PgPool>, config: Config) -> Self {
        Self { pool, config }
    }
}

pub fn router(state: AppState) -> Router {
    // ---
    Router::new()
        .merge(stations::router())
        .merge(summary::router())
        .merge(score::router::<AppState>())
        .merge(health::router())
        .with_state(state)
}

impl IntoResponse for FireRiskError {
    fn into_response(self) -> Response {
        // ---
        let status = match &self {
            FireRiskError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            FireRiskError::Feed(_) => StatusCode::BAD_GATEWAY,
            FireRiskError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

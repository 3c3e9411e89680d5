use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::info;

use super::AppState;
use crate::feed::load_readings;
use crate::scene::{overview_camera, CameraView};
use crate::summary::{tally_readings, SeverityCounts};
use crate::FireRiskError;

// ---

#[derive(Debug, Serialize)]
struct SummaryResponse {
    total: usize,
    counts: SeverityCounts,
    /// Absent when there are no stations to frame.
    camera: Option<CameraView>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/fire-risk/summary", get(summary))
}

/// Handle `GET /fire-risk/summary`.
async fn summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, FireRiskError> {
    // ---
    let readings = load_readings(&state.config).await?;
    let counts = tally_readings(&readings);

    info!(
        "Summary over {} stations: {} extreme, {} high, {} medium, {} low",
        counts.total(),
        counts.extreme,
        counts.high,
        counts.medium,
        counts.low
    );

    Ok(Json(SummaryResponse {
        total: counts.total(),
        counts,
        camera: overview_camera(&readings),
    }))
}

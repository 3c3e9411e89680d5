use axum::{body::Bytes, routing::post, Json, Router};
use tracing::debug;

use crate::assessment::{assess, StationAssessment};
use crate::models::RawSensorReading;
use crate::FireRiskError;

// ---

/// Stateless: scores whatever reading the caller sends.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/fire-risk/score", post(score_reading))
}

/// Handle `POST /fire-risk/score`.
///
/// The body is taken as raw bytes and decoded here, so truncated JSON, a
/// missing content type and wrong field types all surface as the same 422
/// validation error.
async fn score_reading(body: Bytes) -> Result<Json<StationAssessment>, FireRiskError> {
    // ---
    let reading = RawSensorReading::from_slice(&body)?.validate()?;
    let assessment = assess(&reading);

    debug!(
        "Scored {}: FRI {:.3} -> {}",
        reading.station_id, assessment.score.composite, assessment.alert.severity
    );
    Ok(Json(assessment))
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Deserializer};
use serde_json::json;
use sqlx::PgPool;
use tracing::{debug, error, info, warn};

use super::AppState;
use crate::alert::Severity;
use crate::assessment::{assess, StationAssessment};
use crate::feed::load_readings;
use crate::store::{store_assessment, update_station_summaries};
use crate::FireRiskError;

// ---

const DEFAULT_LIMIT: u32 = 1000;

pub fn router() -> Router<AppState> {
    // ---
    Router::new()
        .route("/fire-risk/stations", get(list_stations))
        .route("/fire-risk/stations/{station_id}", get(get_station))
}

async fn list_stations(
    Query(params): Query<StationsQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<StationAssessment>>, FireRiskError> {
    // ---
    info!("GET /fire-risk/stations - Starting pipeline");

    // Step 1: Load readings
    debug!("GET /fire-risk/stations - Step 1");
    let readings = load_readings(&state.config).await?;

    // Step 2: Score, classify and style
    debug!("GET /fire-risk/stations - Step 2");
    let assessments: Vec<StationAssessment> = readings.iter().map(assess).collect();
    log_alerts(&assessments);

    // Step 3: Persist, if a database is configured
    debug!("GET /fire-risk/stations - Step 3");
    if let Some(pool) = &state.pool {
        persist(pool, &assessments).await;
    }

    // Step 4: Apply filters and return data
    let filtered = apply_filters(assessments, &params);
    info!("Pipeline complete, returning {} assessments", filtered.len());
    Ok(Json(filtered))
}

async fn get_station(
    Path(station_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, FireRiskError> {
    // ---
    debug!("GET /fire-risk/stations/{}", station_id);

    let readings = load_readings(&state.config).await?;
    let response = match readings.iter().find(|r| r.station_id == station_id) {
        Some(reading) => Json(assess(reading)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("station '{}' not found", station_id) })),
        )
            .into_response(),
    };
    Ok(response)
}

// ---

fn log_alerts(assessments: &[StationAssessment]) {
    // ---
    for a in assessments.iter().filter(|a| a.alert.severity >= Severity::High) {
        warn!(
            station_id = %a.reading.station_id,
            fri = a.score.composite,
            severity = %a.alert.severity,
            "Fire risk alert: {}",
            a.alert.action.as_str()
        );
    }
}

/// Store every assessment and refresh the rollups. Storage failures are
/// logged; the caller still gets its data.
async fn persist(pool: &PgPool, assessments: &[StationAssessment]) {
    // ---
    let mut stored = 0usize;
    for assessment in assessments {
        match store_assessment(pool, assessment).await {
            Ok(id) => {
                stored += 1;
                debug!("Stored assessment {} for {}", id, assessment.reading.station_id);
            }
            Err(e) => error!(
                "Failed to store assessment for {}: {}",
                assessment.reading.station_id, e
            ),
        }
    }
    debug!("Stored {} of {} assessments", stored, assessments.len());

    if let Err(e) = update_station_summaries(pool).await {
        error!("Failed to update station summaries: {}", e);
    }
}

/// Query parameters for filtering assessments
#[derive(Debug, Default, Deserialize)]
pub struct StationsQuery {
    station_id: Option<String>,
    /// Case-insensitive level name, e.g. `high` or `EXTREME`
    #[serde(default, deserialize_with = "deserialize_severity")]
    severity: Option<Severity>,
    /// Only stations whose FRI is at least this value
    min_fri: Option<f64>,
    limit: Option<u32>,
}

fn deserialize_severity<'de, D>(deserializer: D) -> Result<Option<Severity>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<Severity>().map_err(serde::de::Error::custom))
        .transpose()
}

fn apply_filters(
    assessments: Vec<StationAssessment>,
    params: &StationsQuery,
) -> Vec<StationAssessment> {
    // ---
    debug!("Apply filter: {:?}", params);
    assessments
        .into_iter()
        .filter(|a| {
            params
                .station_id
                .as_ref()
                .map_or(true, |id| &a.reading.station_id == id)
        })
        .filter(|a| params.severity.map_or(true, |s| a.alert.severity == s))
        .filter(|a| params.min_fri.map_or(true, |min| a.score.composite >= min))
        .take(params.limit.unwrap_or(DEFAULT_LIMIT) as usize)
        .collect()
}

//! Error types for the fire-risk service.
//!
//! Scoring and classification never fail; everything here lives at the
//! boundaries: decoding a reading off the wire, talking to the telemetry
//! feed, and writing assessments to Postgres.

use thiserror::Error;

/// A reading that cannot be admitted into the scoring pipeline.
///
/// Out-of-range measurements are *not* validation errors; the scorer clamps
/// those. Only structurally wrong input ends up here.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("malformed sensor reading: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("station_id must not be empty")]
    MissingStationId,

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

#[derive(Debug, Error)]
pub enum FireRiskError {
    #[error("invalid sensor reading: {0}")]
    Validation(#[from] ValidationError),

    #[error("sensor feed request failed: {0}")]
    Feed(#[from] reqwest::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

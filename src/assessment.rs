//! One station, fully evaluated.

use serde::Serialize;

use crate::alert::{classify, AlertClassification};
use crate::models::SensorReading;
use crate::risk::{score, RiskScore};
use crate::scene::{marker, StationMarker};

// ---

/// A reading with its score, alert and scene marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationAssessment {
    // ---
    pub reading: SensorReading,
    pub score: RiskScore,
    pub alert: AlertClassification,
    pub marker: StationMarker,
}

/// Score, classify and style a reading.
pub fn assess(reading: &SensorReading) -> StationAssessment {
    // ---
    let score = score(reading);
    let alert = classify(&score);
    let marker = marker(reading, &score, alert.severity);

    StationAssessment {
        reading: reading.clone(),
        score,
        alert,
        marker,
    }
}

//! Sensor reading models for the fire-risk pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ---

/// A point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    // ---
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPosition {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// Raw sensor frame as it arrives from the feed or the scoring endpoint.
///
/// Measurements are optional; a station with a broken sensor simply omits
/// the field (or sends `null`). The camelCase aliases match the field names
/// the dashboard fixtures were written with.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSensorReading {
    // ---
    #[serde(alias = "sensorId")]
    pub station_id: String,
    #[serde(default)]
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    #[serde(alias = "soilMoisture")]
    pub soil_moisture: Option<f64>,
    #[serde(alias = "windSpeed")]
    pub wind_speed: Option<f64>,
    #[serde(alias = "windDirection")]
    pub wind_direction: Option<f64>,
    pub smoke: Option<f64>,
    pub co: Option<f64>,
    #[serde(alias = "timestamp")]
    pub observed_at: Option<DateTime<Utc>>,
}

/// Validated snapshot from one monitoring station.
///
/// Units: temperature in °C, humidity and soil moisture in %, wind speed in
/// km/h, wind direction in degrees from north, smoke as a 0..1 index and CO
/// in ppm. Values are kept exactly as reported; clamping happens in
/// [`crate::risk::score`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    // ---
    pub station_id: String,
    pub name: String,
    pub position: GeoPosition,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub soil_moisture: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub smoke: Option<f64>,
    pub co: Option<f64>,
    pub observed_at: Option<DateTime<Utc>>,
}

impl RawSensorReading {
    // ---
    /// Decode a JSON value, rejecting fields of the wrong type.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ValidationError> {
        serde_json::from_value(value).map_err(ValidationError::Malformed)
    }

    /// Decode a request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        serde_json::from_slice(body).map_err(ValidationError::Malformed)
    }

    /// Check structural constraints and produce a [`SensorReading`].
    ///
    /// An empty display name falls back to the station id.
    pub fn validate(self) -> Result<SensorReading, ValidationError> {
        // ---
        let station_id = self.station_id.trim().to_string();
        if station_id.is_empty() {
            return Err(ValidationError::MissingStationId);
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ValidationError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ValidationError::LongitudeOutOfRange(self.longitude));
        }

        let name = if self.name.trim().is_empty() {
            station_id.clone()
        } else {
            self.name
        };

        Ok(SensorReading {
            station_id,
            name,
            position: GeoPosition::new(self.longitude, self.latitude),
            temperature: self.temperature,
            humidity: self.humidity,
            soil_moisture: self.soil_moisture,
            wind_speed: self.wind_speed,
            wind_direction: self.wind_direction,
            smoke: self.smoke,
            co: self.co,
            observed_at: self.observed_at,
        })
    }
}

/// Build a fully-populated reading for tests in other modules.
#[cfg(test)]
pub(crate) fn test_reading(
    temperature: f64,
    humidity: f64,
    soil_moisture: f64,
    wind_speed: f64,
    smoke: f64,
    co: f64,
) -> SensorReading {
    // ---
    SensorReading {
        station_id: "FR_TEST".to_string(),
        name: "Test station".to_string(),
        position: GeoPosition::new(108.45, 11.94),
        temperature: Some(temperature),
        humidity: Some(humidity),
        soil_moisture: Some(soil_moisture),
        wind_speed: Some(wind_speed),
        wind_direction: Some(0.0),
        smoke: Some(smoke),
        co: Some(co),
        observed_at: None,
    }
}

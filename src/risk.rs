//! Fire Risk Index (FRI) scoring.
//!
//! The FRI is a weighted linear combination of six normalized factors, each
//! mapped into `[0, 1]` before weighting:
//!
//! | Factor        | Normalization          | Weight |
//! |---------------|------------------------|--------|
//! | Temperature   | `min(t / 50, 1)`       | 25 %   |
//! | Humidity      | `1 - h / 100`          | 20 %   |
//! | Soil moisture | `1 - s / 100`          | 15 %   |
//! | Wind speed    | `min(w / 30, 1)`       | 15 %   |
//! | Smoke index   | identity               | 15 %   |
//! | CO            | `min(co / 1, 1)`       | 10 %   |
//!
//! Inputs are clamped to their physical ranges first, so a garbage frame can
//! never push a sub-score outside `[0, 1]`. A missing or non-finite value
//! contributes the lowest risk its factor allows.
//!
//! Weights are held as whole percentages and the sum is divided by 100 once
//! at the end; a composite built only from saturated or zero sub-scores is
//! therefore an exact multiple of 0.05 and lands precisely on the alert
//! thresholds.

use serde::Serialize;

use crate::models::SensorReading;

// ---

/// Temperature (°C) at which the temperature factor saturates.
pub const TEMPERATURE_SATURATION_C: f64 = 50.0;

/// Wind speed (km/h) at which the wind factor saturates.
pub const WIND_SATURATION_KMH: f64 = 30.0;

/// CO concentration (ppm) at which the CO factor saturates.
pub const CO_SATURATION_PPM: f64 = 1.0;

pub const TEMPERATURE_WEIGHT_PCT: f64 = 25.0;
pub const HUMIDITY_WEIGHT_PCT: f64 = 20.0;
pub const SOIL_MOISTURE_WEIGHT_PCT: f64 = 15.0;
pub const WIND_WEIGHT_PCT: f64 = 15.0;
pub const SMOKE_WEIGHT_PCT: f64 = 15.0;
pub const CO_WEIGHT_PCT: f64 = 10.0;

/// Normalized per-factor contributions, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SubScores {
    // ---
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
    pub wind: f64,
    pub smoke: f64,
    pub co: f64,
}

impl SubScores {
    /// Weighted sum in percent points (0..=100).
    fn weighted_percent(&self) -> f64 {
        // ---
        self.temperature * TEMPERATURE_WEIGHT_PCT
            + self.humidity * HUMIDITY_WEIGHT_PCT
            + self.soil_moisture * SOIL_MOISTURE_WEIGHT_PCT
            + self.wind * WIND_WEIGHT_PCT
            + self.smoke * SMOKE_WEIGHT_PCT
            + self.co * CO_WEIGHT_PCT
    }
}

/// Result of scoring one reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RiskScore {
    // ---
    /// The Fire Risk Index, in `[0, 1]`.
    pub composite: f64,
    pub sub_scores: SubScores,
}

impl RiskScore {
    /// FRI as a whole percentage, as shown on marker labels.
    pub fn percent(&self) -> u32 {
        (self.composite * 100.0).round() as u32
    }
}

/// Score a reading. Pure: no I/O, no hidden state.
pub fn score(reading: &SensorReading) -> RiskScore {
    // ---
    let sub_scores = SubScores {
        temperature: ratio(measured(reading.temperature).unwrap_or(0.0), TEMPERATURE_SATURATION_C),
        humidity: inverted_percent(measured(reading.humidity).unwrap_or(100.0)),
        soil_moisture: inverted_percent(measured(reading.soil_moisture).unwrap_or(100.0)),
        wind: ratio(measured(reading.wind_speed).unwrap_or(0.0), WIND_SATURATION_KMH),
        smoke: measured(reading.smoke).unwrap_or(0.0).clamp(0.0, 1.0),
        co: ratio(measured(reading.co).unwrap_or(0.0), CO_SATURATION_PPM),
    };

    let composite = (sub_scores.weighted_percent() / 100.0).clamp(0.0, 1.0);

    RiskScore {
        composite,
        sub_scores,
    }
}

/// A non-finite value is as good as no value.
fn measured(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// `value / saturation`, clamped into `[0, 1]`.
fn ratio(value: f64, saturation: f64) -> f64 {
    (value / saturation).clamp(0.0, 1.0)
}

/// `1 - pct / 100` with `pct` clamped into `[0, 100]`.
fn inverted_percent(pct: f64) -> f64 {
    1.0 - pct.clamp(0.0, 100.0) / 100.0
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::models::test_reading;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_weights_sum_to_one_hundred_percent() {
        // ---
        let total = TEMPERATURE_WEIGHT_PCT
            + HUMIDITY_WEIGHT_PCT
            + SOIL_MOISTURE_WEIGHT_PCT
            + WIND_WEIGHT_PCT
            + SMOKE_WEIGHT_PCT
            + CO_WEIGHT_PCT;
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_saturated_reading_scores_exactly_one() {
        // ---
        for (t, w, co) in [(50.0, 30.0, 1.0), (65.0, 80.0, 12.0), (50.0, 31.0, 1.5)] {
            let s = score(&test_reading(t, 0.0, 0.0, w, 1.0, co));
            assert_eq!(s.composite, 1.0);
            assert_eq!(s.sub_scores.temperature, 1.0);
            assert_eq!(s.sub_scores.wind, 1.0);
            assert_eq!(s.sub_scores.co, 1.0);
        }
    }

    #[test]
    fn test_calm_reading_scores_exactly_zero() {
        // ---
        let s = score(&test_reading(0.0, 100.0, 100.0, 0.0, 0.0, 0.0));
        assert_eq!(s.composite, 0.0);
        assert_eq!(s.sub_scores, SubScores::default());
    }

    #[test]
    fn test_threshold_composites_are_exact() {
        // ---
        // temperature + soil + wind + smoke + co = 25 + 15 + 15 + 15 + 10
        let s = score(&test_reading(50.0, 100.0, 0.0, 30.0, 1.0, 1.0));
        assert_eq!(s.composite, 0.8);

        // temperature + humidity + soil = 25 + 20 + 15
        let s = score(&test_reading(50.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(s.composite, 0.6);

        // wind + smoke = 15 + 15
        let s = score(&test_reading(0.0, 100.0, 100.0, 30.0, 1.0, 0.0));
        assert_eq!(s.composite, 0.3);
    }

    #[test]
    fn test_fr_003_scenario() {
        // ---
        let s = score(&test_reading(42.1, 18.0, 10.0, 18.0, 0.95, 0.6));

        assert_close(s.sub_scores.temperature, 0.842);
        assert_close(s.sub_scores.humidity, 0.82);
        assert_close(s.sub_scores.soil_moisture, 0.90);
        assert_close(s.sub_scores.wind, 0.60);
        assert_close(s.sub_scores.smoke, 0.95);
        assert_close(s.sub_scores.co, 0.60);

        // 0.2105 + 0.164 + 0.135 + 0.09 + 0.1425 + 0.06
        assert_close(s.composite, 0.802);
        assert_eq!(s.percent(), 80);
    }

    #[test]
    fn test_out_of_range_inputs_are_clamped() {
        // ---
        let s = score(&test_reading(500.0, -20.0, 150.0, -5.0, 4.2, -1.0));

        assert_eq!(s.sub_scores.temperature, 1.0);
        assert_eq!(s.sub_scores.humidity, 1.0);
        assert_eq!(s.sub_scores.soil_moisture, 0.0);
        assert_eq!(s.sub_scores.wind, 0.0);
        assert_eq!(s.sub_scores.smoke, 1.0);
        assert_eq!(s.sub_scores.co, 0.0);
        assert_eq!(s.composite, 0.6);

        let freezing = score(&test_reading(-30.0, 50.0, 50.0, 10.0, 0.2, 0.1));
        assert_eq!(freezing.sub_scores.temperature, 0.0);
    }

    #[test]
    fn test_missing_fields_contribute_lowest_risk() {
        // ---
        let mut reading = test_reading(40.0, 10.0, 10.0, 20.0, 0.5, 0.5);
        reading.temperature = None;
        reading.humidity = None;
        reading.soil_moisture = None;
        reading.wind_speed = None;
        reading.smoke = None;
        reading.co = None;

        let s = score(&reading);
        assert_eq!(s.composite, 0.0);
        assert_eq!(s.sub_scores, SubScores::default());
    }

    #[test]
    fn test_missing_humidity_counts_as_saturated_air() {
        // ---
        let mut reading = test_reading(50.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        reading.humidity = None;

        let s = score(&reading);
        assert_eq!(s.sub_scores.humidity, 0.0);
        // temperature + soil = 25 + 15
        assert_eq!(s.composite, 0.4);
    }

    #[test]
    fn test_non_finite_values_are_treated_as_missing() {
        // ---
        let s = score(&test_reading(f64::NAN, f64::NAN, f64::INFINITY, f64::NAN, f64::NAN, f64::INFINITY));
        assert_eq!(s.composite, 0.0);
        assert!(!s.composite.is_nan());
    }

    #[test]
    fn test_composite_is_monotonic_in_temperature() {
        // ---
        let mut previous = f64::NEG_INFINITY;
        for step in 0..=160 {
            let t = -10.0 + step as f64 * 0.5;
            let s = score(&test_reading(t, 35.0, 40.0, 12.0, 0.3, 0.2));
            assert!(
                s.composite >= previous,
                "composite dropped from {previous} to {} at {t}°C",
                s.composite
            );
            previous = s.composite;
        }
    }

    #[test]
    fn test_score_is_bit_identical_across_calls() {
        // ---
        let reading = test_reading(33.3, 41.7, 27.9, 13.1, 0.37, 0.19);
        let a = score(&reading);
        let b = score(&reading);

        assert_eq!(a.composite.to_bits(), b.composite.to_bits());
        assert_eq!(a.sub_scores.temperature.to_bits(), b.sub_scores.temperature.to_bits());
        assert_eq!(a, b);
    }
}

//! Values handed to the 3D scene.
//!
//! Nothing here draws anything. The globe front end receives marker styles,
//! label text, wind arrows, risk-zone radii and a camera target, all derived
//! from a scored reading, and renders them however it likes.

use serde::Serialize;

use crate::alert::{Severity, HIGH_THRESHOLD};
use crate::models::{GeoPosition, SensorReading};
use crate::risk::RiskScore;

// ---

/// Base arrow length in degrees for a calm station.
const WIND_ARROW_BASE_DEG: f64 = 0.005;

/// Extra arrow length in degrees at saturated wind speed.
const WIND_ARROW_SPAN_DEG: f64 = 0.01;

const RISK_ZONE_BASE_M: f64 = 500.0;
const RISK_ZONE_SPAN_M: f64 = 500.0;

const CAMERA_ALTITUDE_M: f64 = 15_000.0;
const CAMERA_PITCH_DEG: f64 = -45.0;

/// Display style for one severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityStyle {
    // ---
    pub color: &'static str,
    pub label: &'static str,
}

const STYLES: [(Severity, SeverityStyle); 4] = [
    (
        Severity::Low,
        SeverityStyle {
            color: "#4CAF50",
            label: "Low",
        },
    ),
    (
        Severity::Medium,
        SeverityStyle {
            color: "#FFEB3B",
            label: "Moderate",
        },
    ),
    (
        Severity::High,
        SeverityStyle {
            color: "#FF9800",
            label: "High danger",
        },
    ),
    (
        Severity::Extreme,
        SeverityStyle {
            color: "#F44336",
            label: "Extreme danger",
        },
    ),
];

pub fn style_for(severity: Severity) -> SeverityStyle {
    // ---
    STYLES
        .iter()
        .find(|(level, _)| *level == severity)
        .map(|(_, style)| *style)
        .unwrap_or(STYLES[0].1)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindArrow {
    pub from: GeoPosition,
    pub to: GeoPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationMarker {
    // ---
    pub position: GeoPosition,
    pub style: SeverityStyle,
    pub label: String,
    pub wind_arrow: WindArrow,
    /// Circle radius in metres, present only for HIGH and EXTREME stations.
    pub risk_zone_radius_m: Option<f64>,
}

/// Camera placement for the overview of a station network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraView {
    // ---
    pub target: GeoPosition,
    pub altitude_m: f64,
    pub heading_deg: f64,
    pub pitch_deg: f64,
}

/// Arithmetic mean of a set of positions; `None` when there are none.
///
/// Good enough for station clusters and field-sized polygons; it is not a
/// true area centroid and ignores the antimeridian.
pub fn center(points: &[GeoPosition]) -> Option<GeoPosition> {
    // ---
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (lon, lat) = points.iter().fold((0.0, 0.0), |(lon, lat), p| {
        (lon + p.longitude, lat + p.latitude)
    });
    Some(GeoPosition::new(lon / n, lat / n))
}

/// Arrow from the station pointing along the wind direction, longer for
/// stronger wind. `wind_score` is the normalized wind sub-score.
pub fn wind_arrow(origin: GeoPosition, direction_deg: Option<f64>, wind_score: f64) -> WindArrow {
    // ---
    let length = WIND_ARROW_BASE_DEG + wind_score.clamp(0.0, 1.0) * WIND_ARROW_SPAN_DEG;
    let bearing = direction_deg
        .filter(|d| d.is_finite())
        .unwrap_or(0.0)
        .rem_euclid(360.0)
        .to_radians();

    WindArrow {
        from: origin,
        to: GeoPosition::new(
            origin.longitude + bearing.sin() * length,
            origin.latitude + bearing.cos() * length,
        ),
    }
}

pub fn risk_zone_radius(score: &RiskScore) -> Option<f64> {
    // ---
    (score.composite >= HIGH_THRESHOLD).then(|| RISK_ZONE_BASE_M + score.composite * RISK_ZONE_SPAN_M)
}

pub fn marker_label(name: &str, score: &RiskScore, severity: Severity) -> String {
    format!("{name}\nFRI: {}%\n{}", score.percent(), style_for(severity).label)
}

pub fn marker(reading: &SensorReading, score: &RiskScore, severity: Severity) -> StationMarker {
    // ---
    StationMarker {
        position: reading.position,
        style: style_for(severity),
        label: marker_label(&reading.name, score, severity),
        wind_arrow: wind_arrow(reading.position, reading.wind_direction, score.sub_scores.wind),
        risk_zone_radius_m: risk_zone_radius(score),
    }
}

/// Overview camera centered on the stations; `None` for an empty network.
pub fn overview_camera(readings: &[SensorReading]) -> Option<CameraView> {
    // ---
    let positions: Vec<GeoPosition> = readings.iter().map(|r| r.position).collect();
    center(&positions).map(|target| CameraView {
        target,
        altitude_m: CAMERA_ALTITUDE_M,
        heading_deg: 0.0,
        pitch_deg: CAMERA_PITCH_DEG,
    })
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::risk::SubScores;

    const EPS: f64 = 1e-12;

    fn with_composite(composite: f64) -> RiskScore {
        RiskScore {
            composite,
            sub_scores: SubScores::default(),
        }
    }

    #[test]
    fn test_every_severity_has_a_distinct_style() {
        // ---
        let colors: Vec<_> = Severity::ALL.iter().map(|s| style_for(*s).color).collect();
        assert_eq!(colors, vec!["#4CAF50", "#FFEB3B", "#FF9800", "#F44336"]);
    }

    #[test]
    fn test_center_of_positions() {
        // ---
        assert_eq!(center(&[]), None);

        let points = [
            GeoPosition::new(108.0, 11.0),
            GeoPosition::new(109.0, 12.0),
            GeoPosition::new(108.5, 13.0),
            GeoPosition::new(108.5, 12.0),
        ];
        let c = center(&points).unwrap();
        assert!((c.longitude - 108.5).abs() < EPS);
        assert!((c.latitude - 12.0).abs() < EPS);
    }

    #[test]
    fn test_wind_arrow_points_along_bearing() {
        // ---
        let origin = GeoPosition::new(108.45, 11.94);

        // North, calm: base length straight up
        let north = wind_arrow(origin, Some(0.0), 0.0);
        assert!((north.to.longitude - origin.longitude).abs() < EPS);
        assert!((north.to.latitude - (origin.latitude + 0.005)).abs() < EPS);

        // East, saturated wind: full length to the right
        let east = wind_arrow(origin, Some(90.0), 1.0);
        assert!((east.to.longitude - (origin.longitude + 0.015)).abs() < EPS);
        assert!((east.to.latitude - origin.latitude).abs() < EPS);

        // Bearings wrap
        let wrapped = wind_arrow(origin, Some(450.0), 1.0);
        assert!((wrapped.to.longitude - east.to.longitude).abs() < EPS);

        // Missing direction points north
        let unknown = wind_arrow(origin, None, 0.0);
        assert_eq!(unknown.to, north.to);
    }

    #[test]
    fn test_risk_zone_only_for_high_and_extreme() {
        // ---
        assert_eq!(risk_zone_radius(&with_composite(0.59)), None);
        assert_eq!(risk_zone_radius(&with_composite(0.6)), Some(800.0));
        assert_eq!(risk_zone_radius(&with_composite(1.0)), Some(1000.0));
    }

    #[test]
    fn test_marker_label_format() {
        // ---
        let label = marker_label("Trạm Langbiang", &with_composite(0.802), Severity::Extreme);
        assert_eq!(label, "Trạm Langbiang\nFRI: 80%\nExtreme danger");
    }

    #[test]
    fn test_overview_camera_targets_station_center() {
        // ---
        assert_eq!(overview_camera(&[]), None);

        let mut a = crate::models::test_reading(30.0, 50.0, 50.0, 10.0, 0.1, 0.1);
        a.position = GeoPosition::new(108.40, 11.90);
        let mut b = a.clone();
        b.position = GeoPosition::new(108.50, 11.98);

        let camera = overview_camera(&[a, b]).unwrap();
        assert!((camera.target.longitude - 108.45).abs() < EPS);
        assert!((camera.target.latitude - 11.94).abs() < EPS);
        assert_eq!(camera.altitude_m, 15_000.0);
        assert_eq!(camera.pitch_deg, -45.0);
    }
}

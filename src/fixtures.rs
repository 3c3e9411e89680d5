//! Built-in station fixture used when no telemetry feed is configured.
//!
//! Five stations in the pine forests around Đà Lạt, chosen to cover every
//! severity level at least once.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{GeoPosition, SensorReading};

// ---

struct Station {
    id: &'static str,
    name: &'static str,
    lon: f64,
    lat: f64,
    /// temperature, humidity, soil moisture, wind speed, wind direction, smoke, co
    values: [f64; 7],
}

const STATIONS: [Station; 5] = [
    Station {
        id: "FR_001",
        name: "Trạm Langbiang",
        lon: 108.4412,
        lat: 11.9804,
        values: [28.5, 65.0, 45.0, 8.0, 45.0, 0.10, 0.05],
    },
    Station {
        id: "FR_002",
        name: "Trạm Rừng Thông Prenn",
        lon: 108.4721,
        lat: 11.8903,
        values: [35.0, 40.0, 30.0, 12.0, 120.0, 0.35, 0.2],
    },
    Station {
        id: "FR_003",
        name: "Trạm Đồi Thông Tà Nung",
        lon: 108.3950,
        lat: 11.9310,
        values: [42.1, 18.0, 10.0, 18.0, 225.0, 0.95, 0.6],
    },
    Station {
        id: "FR_004",
        name: "Trạm Đồi Robin",
        lon: 108.4370,
        lat: 11.9260,
        values: [38.0, 28.0, 20.0, 15.0, 270.0, 0.6, 0.4],
    },
    Station {
        id: "FR_005",
        name: "Trạm Hồ Tuyền Lâm",
        lon: 108.4260,
        lat: 11.8980,
        values: [22.0, 85.0, 70.0, 5.0, 90.0, 0.02, 0.01],
    },
];

fn observed_at() -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2025, 3, 26, 13, 0, 0).single()
}

/// Readings for every fixture station.
pub fn fire_stations() -> Vec<SensorReading> {
    // ---
    STATIONS
        .iter()
        .map(|s| {
            let [temperature, humidity, soil_moisture, wind_speed, wind_direction, smoke, co] =
                s.values;
            SensorReading {
                station_id: s.id.to_string(),
                name: s.name.to_string(),
                position: GeoPosition::new(s.lon, s.lat),
                temperature: Some(temperature),
                humidity: Some(humidity),
                soil_moisture: Some(soil_moisture),
                wind_speed: Some(wind_speed),
                wind_direction: Some(wind_direction),
                smoke: Some(smoke),
                co: Some(co),
                observed_at: observed_at(),
            }
        })
        .collect()
}

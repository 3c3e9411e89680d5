//! Reading sources: the paginated telemetry feed or the built-in fixture.

use tracing::{debug, info, warn};

use crate::error::FireRiskError;
use crate::fixtures;
use crate::models::{RawSensorReading, SensorReading};
use crate::Config;

// ---

/// Load the current readings from whichever source is configured.
pub async fn load_readings(config: &Config) -> Result<Vec<SensorReading>, FireRiskError> {
    // ---
    match &config.api_url {
        Some(api_url) => Ok(fetch_sensor_data(api_url, config.api_max_pages).await?),
        None => {
            let readings = fixtures::fire_stations();
            debug!("Loaded {} readings from station fixture", readings.len());
            Ok(readings)
        }
    }
}

/// Fetch paginated sensor data from the telemetry feed.
///
/// Each page is `{"results": [...], "next_cursor": "..." | null}`. Items
/// that fail validation are logged and skipped so one bad frame never
/// drops a whole page.
pub async fn fetch_sensor_data(
    base_url: &str,
    max_pages: u32,
) -> Result<Vec<SensorReading>, reqwest::Error> {
    // ---
    let client = reqwest::Client::new();
    let mut all_data = Vec::new();
    let mut cursor: Option<String> = None;
    let mut page_count = 0;
    let mut rejected = 0usize;

    loop {
        if page_count >= max_pages {
            debug!(
                "Hit page limit of {}, stopping pagination. Fetched {} records so far.",
                max_pages,
                all_data.len()
            );
            break;
        }
        page_count += 1;

        let mut request = client.get(base_url);
        if let Some(ref cursor) = cursor {
            request = request.query(&[("cursor", cursor.as_str())]);
        }

        debug!(
            "Fetching page {} from: {} (cursor: {:?})",
            page_count, base_url, cursor
        );

        let response: serde_json::Value = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match response.get("results").and_then(|d| d.as_array()) {
            Some(items) => {
                debug!("Page {} carries {} items", page_count, items.len());
                for (i, item) in items.iter().enumerate() {
                    match RawSensorReading::from_json(item.clone()).and_then(|raw| raw.validate()) {
                        Ok(reading) => all_data.push(reading),
                        Err(e) => {
                            rejected += 1;
                            debug!(
                                "Skipping item {} on page {}: {} - Raw item: {}",
                                i, page_count, e, item
                            );
                        }
                    }
                }
            }
            None => debug!(
                "Page {} response missing 'results' field or not an array",
                page_count
            ),
        }

        cursor = response
            .get("next_cursor")
            .and_then(|c| c.as_str())
            .map(String::from);

        if cursor.is_none() {
            break;
        }
    }

    if rejected > 0 {
        warn!("Rejected {} malformed readings from feed", rejected);
    }
    info!(
        "Finished fetching {} readings from {} pages",
        all_data.len(),
        page_count
    );
    Ok(all_data)
}

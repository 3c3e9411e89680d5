//! Per-severity tallies across a set of stations.

use serde::Serialize;

use crate::alert::{classify, AlertClassification, Severity};
use crate::models::SensorReading;
use crate::risk::score;

// ---

/// Number of stations at each severity level. Levels with no stations are
/// reported as zero rather than omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct SeverityCounts {
    // ---
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub extreme: usize,
}

impl SeverityCounts {
    pub fn record(&mut self, severity: Severity) {
        // ---
        match severity {
            Severity::Low => self.low += 1,
            Severity::Medium => self.medium += 1,
            Severity::High => self.high += 1,
            Severity::Extreme => self.extreme += 1,
        }
    }

    pub fn get(&self, severity: Severity) -> usize {
        // ---
        match severity {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
            Severity::Extreme => self.extreme,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.extreme
    }
}

/// Fold classifications into a tally.
pub fn tally<'a, I>(alerts: I) -> SeverityCounts
where
    I: IntoIterator<Item = &'a AlertClassification>,
{
    alerts
        .into_iter()
        .fold(SeverityCounts::default(), |mut counts, alert| {
            counts.record(alert.severity);
            counts
        })
}

/// Score, classify and tally a batch of readings.
pub fn tally_readings(readings: &[SensorReading]) -> SeverityCounts {
    // ---
    let alerts: Vec<AlertClassification> = readings.iter().map(|r| classify(&score(r))).collect();
    tally(&alerts)
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::models::test_reading;

    #[test]
    fn test_empty_tally_has_all_levels_at_zero() {
        // ---
        let counts = tally_readings(&[]);
        assert_eq!(counts, SeverityCounts::default());
        for level in Severity::ALL {
            assert_eq!(counts.get(level), 0);
        }
    }

    #[test]
    fn test_tally_counts_each_level() {
        // ---
        let readings = vec![
            test_reading(0.0, 100.0, 100.0, 0.0, 0.0, 0.0),
            test_reading(0.0, 100.0, 100.0, 30.0, 1.0, 0.0),
            test_reading(50.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            test_reading(50.0, 100.0, 0.0, 30.0, 1.0, 1.0),
            test_reading(60.0, 0.0, 0.0, 40.0, 1.0, 3.0),
        ];

        let counts = tally_readings(&readings);
        assert_eq!(counts.low, 1);
        assert_eq!(counts.medium, 1);
        assert_eq!(counts.high, 1);
        assert_eq!(counts.extreme, 2);
        assert_eq!(counts.total(), readings.len());
    }

    #[test]
    fn test_total_matches_input_size() {
        // ---
        let readings: Vec<_> = (0..37)
            .map(|i| {
                let x = i as f64;
                test_reading(x * 1.5, 100.0 - x * 2.5, 90.0 - x * 2.0, x, x / 40.0, x / 30.0)
            })
            .collect();

        assert_eq!(tally_readings(&readings).total(), 37);
    }

    #[test]
    fn test_serializes_every_level() {
        // ---
        let mut counts = SeverityCounts::default();
        counts.record(Severity::High);

        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "LOW": 0, "MEDIUM": 0, "HIGH": 1, "EXTREME": 0 })
        );
    }
}

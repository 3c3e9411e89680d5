//! Alert classification of a Fire Risk Index.
//!
//! Thresholds are inclusive lower bounds, checked from the most severe level
//! down. A station sitting exactly on a boundary is reported at the higher
//! level.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::risk::RiskScore;

// ---

/// Lowest FRI classified as [`Severity::Extreme`].
pub const EXTREME_THRESHOLD: f64 = 0.80;

/// Lowest FRI classified as [`Severity::High`].
pub const HIGH_THRESHOLD: f64 = 0.60;

/// Lowest FRI classified as [`Severity::Medium`].
pub const MEDIUM_THRESHOLD: f64 = 0.30;

/// Severity levels, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Extreme,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Extreme,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Extreme => "EXTREME",
        }
    }

    /// Action recommended to field crews at this level.
    pub fn action(&self) -> Action {
        match self {
            Severity::Low => Action::Safe,
            Severity::Medium => Action::Monitor,
            Severity::High => Action::Warning,
            Severity::Extreme => Action::Evacuate,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown severity '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Safe,
    Monitor,
    Warning,
    Evacuate,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Safe => "SAFE",
            Action::Monitor => "MONITOR",
            Action::Warning => "WARNING",
            Action::Evacuate => "EVACUATE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertClassification {
    // ---
    pub severity: Severity,
    pub action: Action,
}

impl From<Severity> for AlertClassification {
    fn from(severity: Severity) -> Self {
        Self {
            severity,
            action: severity.action(),
        }
    }
}

/// Classify a score.
pub fn classify(score: &RiskScore) -> AlertClassification {
    severity_for(score.composite).into()
}

/// Threshold lookup on a bare FRI value.
pub fn severity_for(fri: f64) -> Severity {
    // ---
    if fri >= EXTREME_THRESHOLD {
        Severity::Extreme
    } else if fri >= HIGH_THRESHOLD {
        Severity::High
    } else if fri >= MEDIUM_THRESHOLD {
        Severity::Medium
    } else {
        Severity::Low
    }
}

//! Fire Risk Index scoring and alerting for environmental monitoring stations.
//!
//! The core is two pure functions: [`score`] turns a [`SensorReading`] into a
//! [`RiskScore`], and [`classify`] maps that score onto a severity level and
//! a recommended action. Everything else in the crate is plumbing around
//! them:
//! - `scene` derives marker styles, wind arrows, risk zones and a camera
//!   target for the globe front end
//! - `feed` and `fixtures` supply readings
//! - `schema` and `store` persist assessments when a database is configured
//! - `routes` exposes the lot over HTTP (EMBP gateway)

pub mod alert;
pub mod assessment;
pub mod config;
pub mod error;
pub mod feed;
pub mod fixtures;
pub mod models;
pub mod risk;
pub mod routes;
pub mod scene;
pub mod schema;
pub mod store;
pub mod summary;
pub mod telemetry;

pub use alert::{classify, Action, AlertClassification, Severity};
pub use assessment::{assess, StationAssessment};
pub use config::Config;
pub use error::{FireRiskError, ValidationError};
pub use models::{GeoPosition, RawSensorReading, SensorReading};
pub use risk::{score, RiskScore, SubScores};
pub use summary::{tally, SeverityCounts};

//! ---
//! aqs_section: "02-impact-engine"
//! aqs_subsection: "module"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Error taxonomy for baseline validation, catalog construction, and export."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
use thiserror::Error;

use crate::catalog::InterventionKey;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Rejections raised at the input boundary before a calculation runs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("baseline reading is missing a zone id")]
    MissingZoneId,
    #[error("baseline for zone '{zone_id}' has negative AQI {aqi}")]
    NegativeAqi { zone_id: String, aqi: f64 },
    #[error("baseline for zone '{zone_id}' has a non-finite AQI")]
    NonFiniteAqi { zone_id: String },
}

/// Construction errors for custom intervention catalogs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("intervention {key} has reduction fraction {fraction} outside (0, 1)")]
    FractionOutOfRange { key: InterventionKey, fraction: f64 },
    #[error("intervention {0} is declared more than once")]
    DuplicateKey(InterventionKey),
    #[error("intervention {key} has impact range {min}-{max}% with min above max")]
    InvalidImpactRange { key: InterventionKey, min: u8, max: u8 },
}

/// Failures surfaced to the user when a report cannot be produced.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no simulation result available; run a simulation first by selecting interventions")]
    NoResult,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("zone '{0}' not found in zone data")]
    UnknownZone(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    SerializationFailed(#[from] serde_json::Error),
    #[error("yaml serialization error: {0}")]
    YamlSerializationFailed(#[from] serde_yaml::Error),
}

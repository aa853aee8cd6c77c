//! ---
//! aqs_section: "02-impact-engine"
//! aqs_subsection: "module"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Simulation result consumed by presentation and export."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
//! Serialised field names are read by name by the export collaborator and must
//! stay stable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::AqiCategory;
use crate::selection::SelectionSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub zone_id: String,
    pub baseline: BaselineSummary,
    pub selections: SelectionSet,
    pub results: ImpactResults,
    pub generated_at: DateTime<Utc>,
}

impl SimulationResult {
    pub fn current_aqi(&self) -> f64 {
        self.baseline.current_aqi
    }

    pub fn new_aqi(&self) -> f64 {
        self.baseline.new_aqi
    }

    pub fn improvement_percent(&self) -> f64 {
        self.results.aqi_reduction
    }

    pub fn current_category(&self) -> AqiCategory {
        AqiCategory::from_aqi(self.baseline.current_aqi)
    }

    pub fn projected_category(&self) -> AqiCategory {
        AqiCategory::from_aqi(self.baseline.new_aqi)
    }

    /// Equality on every computed field, ignoring `generated_at`.
    pub fn same_outcome(&self, other: &SimulationResult) -> bool {
        self.zone_id == other.zone_id
            && self.baseline == other.baseline
            && self.selections == other.selections
            && self.results == other.results
    }
}

/// Original and projected AQI plus pollutant estimates derived from the original AQI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineSummary {
    pub current_aqi: f64,
    pub new_aqi: f64,
    pub current_pm25: f64,
    pub current_pm10: f64,
    pub current_no2: f64,
    pub population_exposed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactResults {
    /// Unclamped sum of AQI points removed by the selected interventions.
    pub total_reduction: f64,
    /// Percent improvement of the projected AQI over the baseline.
    pub aqi_reduction: f64,
    pub pm25_reduction: f64,
    pub pm10_reduction: f64,
    pub no2_reduction: f64,
    pub population_benefited: u64,
    #[serde(flatten)]
    pub heuristics: PresentationHeuristics,
}

/// Display-only figures. These are affine functions of the AQI improvement and
/// are not derived from cost data or measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationHeuristics {
    pub cost_benefit_ratio: f64,
    pub implementation_timeline_months: f64,
    pub confidence: f64,
}

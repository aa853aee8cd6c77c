//! ---
//! aqs_section: "02-impact-engine"
//! aqs_subsection: "module"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Baseline zone readings and AQI classification."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Air-quality reading for one monitored zone, as supplied by the zone data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineReading {
    pub zone_id: String,
    #[serde(default)]
    pub zone_name: String,
    pub aqi: f64,
    /// Zero when the exposed population is unknown.
    #[serde(default)]
    pub population_exposed: u64,
}

impl BaselineReading {
    pub fn new(
        zone_id: impl Into<String>,
        zone_name: impl Into<String>,
        aqi: f64,
        population_exposed: u64,
    ) -> Self {
        Self {
            zone_id: zone_id.into(),
            zone_name: zone_name.into(),
            aqi,
            population_exposed,
        }
    }

    /// Reject readings the calculator cannot interpret.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.zone_id.trim().is_empty() {
            return Err(ValidationError::MissingZoneId);
        }
        if !self.aqi.is_finite() {
            return Err(ValidationError::NonFiniteAqi {
                zone_id: self.zone_id.clone(),
            });
        }
        if self.aqi < 0.0 {
            return Err(ValidationError::NegativeAqi {
                zone_id: self.zone_id.clone(),
                aqi: self.aqi,
            });
        }
        Ok(())
    }

    pub fn category(&self) -> AqiCategory {
        AqiCategory::from_aqi(self.aqi)
    }

    /// Name for display, falling back to the zone id.
    pub fn display_name(&self) -> &str {
        if self.zone_name.trim().is_empty() {
            &self.zone_id
        } else {
            &self.zone_name
        }
    }
}

/// Health bands used by the dashboard status card and map popups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// Upper bounds are inclusive: 50 is still `Good`, 50.5 is `Moderate`.
    pub fn from_aqi(aqi: f64) -> Self {
        match aqi {
            a if a <= 50.0 => AqiCategory::Good,
            a if a <= 100.0 => AqiCategory::Moderate,
            a if a <= 150.0 => AqiCategory::UnhealthyForSensitiveGroups,
            a if a <= 200.0 => AqiCategory::Unhealthy,
            a if a <= 300.0 => AqiCategory::VeryUnhealthy,
            _ => AqiCategory::Hazardous,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Upper-case status string shown on the current-conditions card.
    pub fn status(&self) -> String {
        self.label().to_uppercase()
    }
}

impl std::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

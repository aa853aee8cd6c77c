//! ---
//! aqs_section: "02-impact-engine"
//! aqs_subsection: "module"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Additive AQI impact calculator."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
//! Each selected intervention removes `aqi * fraction` points. Effects add up
//! without interaction or saturation; the only non-linearity is clamping the
//! projected AQI at zero. Selecting enough interventions can therefore push
//! the summed reduction past 100% of the baseline before the clamp applies.

use chrono::Utc;
use tracing::debug;

use crate::{
    catalog::InterventionCatalog,
    errors::ValidationError,
    model::BaselineReading,
    result::{BaselineSummary, ImpactResults, PresentationHeuristics, SimulationResult},
    selection::SelectionSet,
};

pub const PM25_PER_AQI: f64 = 0.4;
pub const PM10_PER_AQI: f64 = 0.6;
pub const NO2_PER_AQI: f64 = 0.2;

pub const PM25_REDUCTION_WEIGHT: f64 = 0.8;
pub const PM10_REDUCTION_WEIGHT: f64 = 0.6;
pub const NO2_REDUCTION_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Copy)]
pub struct ImpactCalculator<'a> {
    catalog: &'a InterventionCatalog,
}

impl Default for ImpactCalculator<'static> {
    fn default() -> Self {
        Self::new(InterventionCatalog::standard())
    }
}

impl<'a> ImpactCalculator<'a> {
    pub fn new(catalog: &'a InterventionCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a InterventionCatalog {
        self.catalog
    }

    /// Project the effect of `selections` on an already validated baseline.
    pub fn compute(&self, baseline: &BaselineReading, selections: &SelectionSet) -> SimulationResult {
        let aqi = baseline.aqi;
        let total_reduction = self.total_reduction(aqi, selections);
        let new_aqi = (aqi - total_reduction).max(0.0);
        let improvement = improvement_percent(aqi, new_aqi);
        let population_benefited =
            (baseline.population_exposed as f64 * improvement / 100.0).round() as u64;

        debug!(
            zone = %baseline.zone_id,
            selected = selections.len(),
            total_reduction,
            new_aqi,
            improvement,
            "impact calculated"
        );

        SimulationResult {
            zone_id: baseline.zone_id.clone(),
            baseline: BaselineSummary {
                current_aqi: aqi,
                new_aqi,
                current_pm25: aqi * PM25_PER_AQI,
                current_pm10: aqi * PM10_PER_AQI,
                current_no2: aqi * NO2_PER_AQI,
                population_exposed: baseline.population_exposed,
            },
            selections: selections.clone(),
            results: ImpactResults {
                total_reduction,
                aqi_reduction: improvement,
                pm25_reduction: improvement * PM25_REDUCTION_WEIGHT,
                pm10_reduction: improvement * PM10_REDUCTION_WEIGHT,
                no2_reduction: improvement * NO2_REDUCTION_WEIGHT,
                population_benefited,
                heuristics: PresentationHeuristics::from_improvement(improvement),
            },
            generated_at: Utc::now(),
        }
    }

    /// Validate the baseline, then compute.
    pub fn compute_checked(
        &self,
        baseline: &BaselineReading,
        selections: &SelectionSet,
    ) -> Result<SimulationResult, ValidationError> {
        baseline.validate()?;
        Ok(self.compute(baseline, selections))
    }

    fn total_reduction(&self, aqi: f64, selections: &SelectionSet) -> f64 {
        selections
            .iter()
            .map(|key| aqi * self.catalog.fraction(key))
            .fold(0.0, |acc, reduction| acc + reduction)
    }
}

/// Percent improvement from `current` to `projected`; zero for a zero baseline.
pub fn improvement_percent(current: f64, projected: f64) -> f64 {
    if current == 0.0 {
        return 0.0;
    }
    (current - projected) / current * 100.0
}

impl PresentationHeuristics {
    pub fn from_improvement(improvement: f64) -> Self {
        Self {
            cost_benefit_ratio: 2.5 + improvement / 20.0,
            implementation_timeline_months: 6.0 + improvement / 10.0,
            confidence: 0.85 + improvement / 400.0,
        }
    }
}

/// Compute against the standard catalog.
pub fn compute(baseline: &BaselineReading, selections: &SelectionSet) -> SimulationResult {
    ImpactCalculator::default().compute(baseline, selections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, ImpactRange, Intervention, InterventionKey};

    fn reading(aqi: f64, population: u64) -> BaselineReading {
        BaselineReading::new("test-zone", "Test Zone", aqi, population)
    }

    #[test]
    fn empty_selection_keeps_baseline() {
        let result = compute(&reading(180.0, 1_000), &SelectionSet::empty());
        assert_eq!(result.new_aqi(), 180.0);
        assert_eq!(result.improvement_percent(), 0.0);
        assert_eq!(result.results.population_benefited, 0);
        assert_eq!(result.results.heuristics.cost_benefit_ratio, 2.5);
        assert_eq!(result.results.heuristics.implementation_timeline_months, 6.0);
        assert_eq!(result.results.heuristics.confidence, 0.85);
    }

    #[test]
    fn zero_baseline_has_no_improvement() {
        assert_eq!(improvement_percent(0.0, 0.0), 0.0);
        let result = compute(&reading(0.0, 500), &SelectionSet::all());
        assert_eq!(result.new_aqi(), 0.0);
        assert_eq!(result.improvement_percent(), 0.0);
        assert_eq!(result.results.population_benefited, 0);
    }

    #[test]
    fn pollutant_estimates_use_original_aqi() {
        let selection = SelectionSet::empty().with(InterventionKey::BanOpenBurning);
        let result = compute(&reading(200.0, 0), &selection);
        assert_eq!(result.baseline.current_pm25, 200.0 * PM25_PER_AQI);
        assert_eq!(result.baseline.current_pm10, 200.0 * PM10_PER_AQI);
        assert_eq!(result.baseline.current_no2, 200.0 * NO2_PER_AQI);
    }

    #[test]
    fn catalog_gaps_contribute_nothing() {
        let catalog = InterventionCatalog::from_entries(vec![Intervention::new(
            InterventionKey::StreetTrees,
            Category::UrbanDesignEnvironment,
            "Street Trees",
            "Strategic tree planting along roads",
            ImpactRange::new(5, 6),
            0.5,
        )])
        .unwrap();
        let calculator = ImpactCalculator::new(&catalog);
        let selection = SelectionSet::empty()
            .with(InterventionKey::StreetTrees)
            .with(InterventionKey::BanOpenBurning);
        let result = calculator.compute(&reading(100.0, 0), &selection);
        assert_eq!(result.results.total_reduction, 50.0);
        assert_eq!(result.new_aqi(), 50.0);
    }

    #[test]
    fn checked_compute_rejects_negative_aqi() {
        let err = ImpactCalculator::default()
            .compute_checked(&reading(-5.0, 0), &SelectionSet::empty())
            .unwrap_err();
        assert!(matches!(err, ValidationError::NegativeAqi { .. }));
    }
}

//! ---
//! aqs_section: "02-impact-engine"
//! aqs_subsection: "module"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Interactive simulator session: selection changes and report export."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
use std::path::{Path, PathBuf};

use aqsim_logging::{aq_debug, log_system_event, LogContext, SystemEventOutcome};

use crate::{
    calculator::ImpactCalculator,
    catalog::InterventionKey,
    errors::{ExportError, ValidationError},
    model::BaselineReading,
    reports::{ExportFormat, ReportExporter, ResultFormatter, REPORT_TITLE},
    result::SimulationResult,
    selection::SelectionSet,
};

/// One zone under study. Every selection change recomputes the result from
/// scratch and replaces the previous one; no history is kept.
#[derive(Debug, Clone)]
pub struct SimulatorSession<'a> {
    calculator: ImpactCalculator<'a>,
    baseline: BaselineReading,
    selections: SelectionSet,
    result: Option<SimulationResult>,
    report_title: String,
}

impl SimulatorSession<'static> {
    /// Open a session against the standard catalog.
    pub fn open(baseline: BaselineReading) -> Result<Self, ValidationError> {
        Self::with_calculator(ImpactCalculator::default(), baseline)
    }
}

impl<'a> SimulatorSession<'a> {
    pub fn with_calculator(
        calculator: ImpactCalculator<'a>,
        baseline: BaselineReading,
    ) -> Result<Self, ValidationError> {
        baseline.validate()?;
        Ok(Self {
            calculator,
            baseline,
            selections: SelectionSet::empty(),
            result: None,
            report_title: REPORT_TITLE.to_owned(),
        })
    }

    /// Title printed at the top of exported reports.
    pub fn with_report_title(mut self, title: impl Into<String>) -> Self {
        self.report_title = title.into();
        self
    }

    pub fn baseline(&self) -> &BaselineReading {
        &self.baseline
    }

    pub fn selections(&self) -> &SelectionSet {
        &self.selections
    }

    /// Latest result, `None` until the first selection change.
    pub fn result(&self) -> Option<&SimulationResult> {
        self.result.as_ref()
    }

    pub fn toggle(&mut self, key: InterventionKey) -> &SimulationResult {
        self.selections.toggle(key);
        self.recompute()
    }

    pub fn set(&mut self, key: InterventionKey, enabled: bool) -> &SimulationResult {
        self.selections.set(key, enabled);
        self.recompute()
    }

    /// Replace the whole selection set at once.
    pub fn apply(&mut self, selections: SelectionSet) -> &SimulationResult {
        self.selections = selections;
        self.recompute()
    }

    fn recompute(&mut self) -> &SimulationResult {
        let result = self.calculator.compute(&self.baseline, &self.selections);
        aq_debug!(
            context = LogContext::new()
                .with_zone(&self.baseline.zone_id)
                .with_selections(self.selections.len()),
            "simulation recomputed: AQI {:.1} -> {:.1}",
            result.current_aqi(),
            result.new_aqi()
        );
        self.result.insert(result)
    }

    /// Export the current result. Failures are returned for display to the user
    /// and leave the session usable.
    pub fn export(&self, output_dir: &Path, format: ExportFormat) -> Result<PathBuf, ExportError> {
        let ctx = LogContext::new()
            .with_zone(&self.baseline.zone_id)
            .with_selections(self.selections.len());

        let outcome = match &self.result {
            Some(result) => {
                let document = ResultFormatter::new(result)
                    .with_title(&self.report_title)
                    .report();
                ReportExporter::from_document(result, document).export(output_dir, format)
            }
            None => Err(ExportError::NoResult),
        };

        match &outcome {
            Ok(path) => log_system_event(
                Some(&ctx),
                "report.export",
                &format!("report written to {}", path.display()),
                SystemEventOutcome::Success,
            ),
            Err(err) => log_system_event(
                Some(&ctx),
                "report.export",
                &err.to_string(),
                SystemEventOutcome::Fault,
            ),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SimulatorSession<'static> {
        SimulatorSession::open(BaselineReading::new(
            "kukatpally-road",
            "Kukatpally Road",
            250.0,
            20_000,
        ))
        .unwrap()
    }

    #[test]
    fn starts_without_result() {
        let session = session();
        assert!(session.result().is_none());
        assert!(session.selections().is_empty());
    }

    #[test]
    fn each_change_replaces_result() {
        let mut session = session();
        let first = session.toggle(InterventionKey::StreetTrees).clone();
        assert_eq!(first.results.total_reduction, 250.0 * 0.06);

        let second = session.toggle(InterventionKey::BanOpenBurning).clone();
        assert!(second.new_aqi() < first.new_aqi());
        assert_eq!(second.selections.len(), 2);

        let third = session.toggle(InterventionKey::StreetTrees).clone();
        assert_eq!(third.selections.len(), 1);
        assert!(third.same_outcome(
            &ImpactCalculator::default().compute(session.baseline(), session.selections())
        ));
    }

    #[test]
    fn export_without_result_is_recoverable() {
        let mut session = session();
        let dir = tempfile::tempdir().unwrap();
        let err = session
            .export(dir.path(), ExportFormat::Text)
            .unwrap_err();
        assert!(matches!(err, ExportError::NoResult));

        session.set(InterventionKey::LowEmissionZone, true);
        let path = session.export(dir.path(), ExportFormat::Text).unwrap();
        assert!(path.exists());

        let titled = session.with_report_title("Kukatpally Road Briefing");
        let path = titled.export(dir.path(), ExportFormat::Text).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with("Kukatpally Road Briefing\n"));
    }

    #[test]
    fn invalid_baseline_is_rejected_on_open() {
        let err = SimulatorSession::open(BaselineReading::new("", "", 10.0, 0)).unwrap_err();
        assert_eq!(err, ValidationError::MissingZoneId);
    }
}

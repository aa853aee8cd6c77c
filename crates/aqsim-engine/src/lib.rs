//! ---
//! aqs_section: "02-impact-engine"
//! aqs_subsection: "module"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Intervention impact simulation for urban air quality."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
//! Rule-based estimator of how policy interventions change a zone's AQI.
//! Computation is synchronous and pure; the static catalog is the only shared
//! state.

pub mod api;
pub mod calculator;
pub mod catalog;
pub mod errors;
pub mod io;
pub mod model;
pub mod reports;
pub mod result;
pub mod selection;
pub mod session;

pub use calculator::{compute, ImpactCalculator};
pub use catalog::{Category, ImpactRange, Intervention, InterventionCatalog, InterventionKey};
pub use errors::{CatalogError, EngineError, ExportError, Result, ValidationError};
pub use model::{AqiCategory, BaselineReading};
pub use reports::{ExportFormat, ReportDocument, ReportExporter, ResultFormatter};
pub use result::{BaselineSummary, ImpactResults, PresentationHeuristics, SimulationResult};
pub use selection::SelectionSet;
pub use session::SimulatorSession;

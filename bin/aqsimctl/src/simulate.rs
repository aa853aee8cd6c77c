//! ---
//! aqs_section: "05-external-interfaces"
//! aqs_subsection: "binary"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Control CLI for exploring interventions and exporting reports."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::{Context, Result};
use aqsim_common::AppConfig;
use aqsim_engine::io::{load_selections_from_file, ZoneFile, ZoneSource};
use aqsim_engine::reports::group_thousands;
use aqsim_engine::{ExportFormat, SelectionSet, SimulationResult, SimulatorSession};
use aqsim_logging::{aq_info, LogContext};
use clap::{Args, ValueEnum};

use crate::inspect::resolve_zone_file;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Zone baseline file (JSON or YAML); defaults to `simulation.zone_file`.
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,
    /// Zone identifier to simulate.
    #[arg(long)]
    zone: String,
    /// Intervention keys to enable, comma separated. Unknown keys are ignored.
    #[arg(long, value_delimiter = ',', value_name = "KEYS")]
    select: Vec<String>,
    /// File holding a `key: bool` selection map.
    #[arg(long, value_name = "FILE")]
    selections_file: Option<PathBuf>,
    /// Enable every intervention in the catalog.
    #[arg(long, conflicts_with_all = ["select", "selections_file"])]
    all: bool,
    /// Print the full result as JSON instead of a summary.
    #[arg(long)]
    json: bool,
    /// Write a report using the configured export directory.
    #[arg(long)]
    export: bool,
    /// Write a report into this directory (implies --export).
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,
    /// Report format; defaults to `export.format`.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
}

impl SimulateArgs {
    fn selections(&self) -> Result<SelectionSet> {
        if self.all {
            return Ok(SelectionSet::all());
        }
        let mut selection = match &self.selections_file {
            Some(path) => load_selections_from_file(path)
                .with_context(|| format!("failed to read selections from {}", path.display()))?,
            None => SelectionSet::empty(),
        };
        for key in SelectionSet::from_names(&self.select).iter() {
            selection.set(key, true);
        }
        Ok(selection)
    }

    fn export_format(&self, config: &AppConfig) -> ExportFormat {
        match self.format {
            Some(FormatArg::Text) => ExportFormat::Text,
            Some(FormatArg::Json) => ExportFormat::Json,
            None => config.export.format,
        }
    }
}

pub fn run(args: SimulateArgs, config: &AppConfig) -> Result<()> {
    let path = resolve_zone_file(args.file.clone(), config)?;
    let baseline = ZoneFile::new(&path)
        .zone(&args.zone)
        .with_context(|| format!("failed to load zone from {}", path.display()))?;

    let mut session =
        SimulatorSession::open(baseline)?.with_report_title(config.export.title.clone());
    let result = session.apply(args.selections()?);
    aq_info!(
        context = LogContext::new()
            .with_zone(&args.zone)
            .with_scenario("simulate")
            .with_selections(result.selections.len()),
        "projected AQI {:.1} -> {:.1}",
        result.current_aqi(),
        result.new_aqi()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print_summary(result);
    }

    let export_dir = match (&args.export_dir, args.export) {
        (Some(dir), _) => Some(dir.clone()),
        (None, true) => Some(config.export.directory.clone()),
        (None, false) => None,
    };
    if let Some(dir) = export_dir {
        let written = session
            .export(&dir, args.export_format(config))
            .context("report export failed")?;
        eprintln!("report written to {}", written.display());
    }
    Ok(())
}

fn print_summary(result: &SimulationResult) {
    let impact = &result.results;
    println!("Zone:               {}", result.zone_id);
    println!(
        "Current AQI:        {:.0} ({})",
        result.current_aqi(),
        result.current_category().label()
    );
    println!(
        "Projected AQI:      {:.0} ({})",
        result.new_aqi(),
        result.projected_category().label()
    );
    println!("Improvement:        {:.0}%", result.improvement_percent());
    println!("Interventions:      {}", result.selections.len());
    println!(
        "PM2.5 / PM10 / NO2: -{:.1}% / -{:.1}% / -{:.1}%",
        impact.pm25_reduction, impact.pm10_reduction, impact.no2_reduction
    );
    println!(
        "People benefited:   {}",
        group_thousands(impact.population_benefited)
    );
    println!(
        "Cost benefit:       {:.1}x over {:.0} months (confidence {:.0}%)",
        impact.heuristics.cost_benefit_ratio,
        impact.heuristics.implementation_timeline_months,
        impact.heuristics.confidence * 100.0
    );
}

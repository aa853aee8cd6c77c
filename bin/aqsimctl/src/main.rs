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

use anyhow::Result;
use aqsim_common::{init_tracing, AppConfig, VersionInfo};
use aqsim_logging::{self as logging, aq_error, LogContext};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};

mod inspect;
mod simulate;

const SERVICE_NAME: &str = "aqsimctl";
const DEFAULT_CONFIG_CANDIDATES: [&str; 2] = ["aqsim.toml", "configs/aqsim.toml"];

#[derive(Debug, Parser)]
#[command(
    author,
    disable_version_flag = true,
    about = "Air-quality intervention simulator",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'V',
        long = "version",
        action = ArgAction::SetTrue,
        help = "Print extended version information and exit"
    )]
    version: bool,
    /// Configuration file (defaults to aqsim.toml or configs/aqsim.toml when present).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "List the intervention catalog")]
    Catalog(inspect::CatalogArgs),
    #[command(about = "List zones from a baseline file")]
    Zones(inspect::ZonesArgs),
    #[command(about = "Project the AQI impact of selected interventions for a zone")]
    Simulate(simulate::SimulateArgs),
}

impl Commands {
    /// Label attached to log events emitted while the command runs.
    fn scenario(&self) -> &'static str {
        match self {
            Commands::Catalog(_) => "catalog",
            Commands::Zones(_) => "zones",
            Commands::Simulate(_) => "simulate",
        }
    }
}

fn load_config(explicit: Option<&PathBuf>) -> Result<Option<AppConfig>> {
    let loaded = match explicit {
        Some(path) => Some(AppConfig::load_with_source(&[path])?),
        None => AppConfig::load_optional(&DEFAULT_CONFIG_CANDIDATES)?,
    };
    Ok(loaded.map(|loaded| loaded.into_resolved()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("{}", VersionInfo::current().extended());
        return Ok(());
    }

    let config = match load_config(cli.config.as_ref())? {
        Some(config) => {
            init_tracing(SERVICE_NAME, &config.logging)?;
            config
        }
        None => {
            logging::init();
            AppConfig::default()
        }
    };

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };
    let scenario = command.scenario();
    let outcome = match command {
        Commands::Catalog(args) => {
            inspect::run_catalog(args);
            Ok(())
        }
        Commands::Zones(args) => inspect::run_zones(args, &config),
        Commands::Simulate(args) => simulate::run(args, &config),
    };
    if let Err(err) = &outcome {
        aq_error!(
            context = LogContext::new().with_scenario(scenario),
            "command failed: {:#}",
            err
        );
    }
    outcome
}

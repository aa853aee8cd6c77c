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

use anyhow::{anyhow, Context, Result};
use aqsim_common::AppConfig;
use aqsim_engine::io::{ZoneFile, ZoneSource};
use aqsim_engine::reports::group_thousands;
use aqsim_engine::{Category, InterventionCatalog};
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Traffic,
    Urban,
    Policy,
}

impl From<CategoryArg> for Category {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Traffic => Category::TrafficTransport,
            CategoryArg::Urban => Category::UrbanDesignEnvironment,
            CategoryArg::Policy => Category::PolicyQuickFixes,
        }
    }
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Only list one category.
    #[arg(long, value_enum)]
    category: Option<CategoryArg>,
    /// Show the AQI points each intervention would remove from this baseline.
    #[arg(long, value_name = "AQI")]
    aqi: Option<f64>,
}

#[derive(Debug, Args)]
pub struct ZonesArgs {
    /// Zone baseline file (JSON or YAML); defaults to `simulation.zone_file`.
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,
}

pub fn run_catalog(args: CatalogArgs) {
    let catalog = InterventionCatalog::standard();
    let categories: Vec<Category> = match args.category {
        Some(category) => vec![category.into()],
        None => catalog.categories(),
    };

    for category in categories {
        println!("{}", category);
        for entry in catalog.by_category(category) {
            let badge = args
                .aqi
                .map(|aqi| format!("  -{} AQI", entry.aqi_badge(aqi)))
                .unwrap_or_default();
            println!(
                "  {:<28} {:<32} {:<22}{}",
                entry.key.as_str(),
                entry.label,
                entry.impact_label(),
                badge
            );
        }
    }
}

pub fn run_zones(args: ZonesArgs, config: &AppConfig) -> Result<()> {
    let path = resolve_zone_file(args.file, config)?;
    let zones = ZoneFile::new(&path)
        .zones()
        .with_context(|| format!("failed to load zones from {}", path.display()))?;
    for zone in zones {
        println!(
            "{:<20} {:<24} AQI {:>6.0}  {:<32} population {}",
            zone.zone_id,
            zone.display_name(),
            zone.aqi,
            zone.category().label(),
            group_thousands(zone.population_exposed)
        );
    }
    Ok(())
}

pub fn resolve_zone_file(explicit: Option<PathBuf>, config: &AppConfig) -> Result<PathBuf> {
    explicit
        .or_else(|| config.simulation.zone_file.clone())
        .ok_or_else(|| anyhow!("no zone file given; pass --file or set simulation.zone_file"))
}

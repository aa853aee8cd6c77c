//! ---
//! aqs_section: "02-impact-engine"
//! aqs_subsection: "module"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Zone baseline and selection loading from JSON/YAML files."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
use std::{
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::{
    errors::{EngineError, Result},
    model::BaselineReading,
    selection::SelectionSet,
};

/// Supplier of baseline readings for monitored zones.
pub trait ZoneSource {
    fn zones(&self) -> Result<Vec<BaselineReading>>;

    fn zone(&self, zone_id: &str) -> Result<BaselineReading> {
        self.zones()?
            .into_iter()
            .find(|zone| zone.zone_id == zone_id)
            .ok_or_else(|| EngineError::UnknownZone(zone_id.to_owned()))
    }
}

/// Zone readings stored in a JSON or YAML file.
#[derive(Debug, Clone)]
pub struct ZoneFile {
    path: PathBuf,
}

impl ZoneFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ZoneSource for ZoneFile {
    fn zones(&self) -> Result<Vec<BaselineReading>> {
        load_zones_from_file(&self.path)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ZoneDocument {
    List(Vec<BaselineReading>),
    Wrapped { zones: Vec<BaselineReading> },
}

/// Load and validate every baseline reading in `path`.
pub fn load_zones_from_file(path: impl AsRef<Path>) -> Result<Vec<BaselineReading>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading zone baselines");
    let data = fs::read_to_string(path)?;
    let document: ZoneDocument = parse_document(&data)?;
    let zones = match document {
        ZoneDocument::List(zones) | ZoneDocument::Wrapped { zones } => zones,
    };
    for zone in &zones {
        zone.validate()?;
    }
    Ok(zones)
}

/// Load a `key -> bool` selection map; unknown keys are ignored.
pub fn load_selections_from_file(path: impl AsRef<Path>) -> Result<SelectionSet> {
    let data = fs::read_to_string(path)?;
    let flags: IndexMap<String, bool> = parse_document(&data)?;
    Ok(SelectionSet::from_flags(flags))
}

fn parse_document<T: for<'de> Deserialize<'de>>(data: &str) -> Result<T> {
    let trimmed = data.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        Ok(serde_json::from_str(data)?)
    } else {
        serde_yaml::from_str(data).map_err(EngineError::YamlSerializationFailed)
    }
}

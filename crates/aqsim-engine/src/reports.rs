//! ---
//! aqs_section: "02-impact-engine"
//! aqs_subsection: "module"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Result formatting and single-page report export."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::{errors::ExportError, model::AqiCategory, result::SimulationResult};

pub const REPORT_TITLE: &str = "Urban Air Quality Report";
const FILE_PREFIX: &str = "Air_Quality_Report";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }
}

/// Fixed fields of the exported report, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    pub title: String,
    pub zone_id: String,
    pub current_aqi: i64,
    pub improved_aqi: i64,
    pub improvement_percent: i64,
    pub population_benefited: u64,
    pub current_category: AqiCategory,
    pub improved_category: AqiCategory,
    pub generated_on: NaiveDate,
}

impl ReportDocument {
    /// `Air_Quality_Report_<zone>_<YYYY-MM-DD>.<ext>`
    pub fn file_name(&self, format: ExportFormat) -> String {
        format!(
            "{}_{}_{}.{}",
            FILE_PREFIX,
            sanitize_file_component(&self.zone_id),
            self.generated_on.format("%Y-%m-%d"),
            format.extension()
        )
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out);
        let _ = writeln!(out, "Zone: {}", self.zone_id);
        let _ = writeln!(
            out,
            "Current AQI: {} ({})",
            self.current_aqi, self.current_category
        );
        let _ = writeln!(
            out,
            "Improved AQI: {} ({})",
            self.improved_aqi, self.improved_category
        );
        let _ = writeln!(out, "Improvement: {}%", self.improvement_percent);
        let _ = writeln!(
            out,
            "People Benefited: {}",
            group_thousands(self.population_benefited)
        );
        let _ = writeln!(out, "Generated on: {}", self.generated_on.format("%Y-%m-%d"));
        out
    }
}

/// Read-only projection of a [`SimulationResult`] into report fields.
#[derive(Debug)]
pub struct ResultFormatter<'a> {
    result: &'a SimulationResult,
    title: &'a str,
}

impl<'a> ResultFormatter<'a> {
    pub fn new(result: &'a SimulationResult) -> Self {
        Self {
            result,
            title: REPORT_TITLE,
        }
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Report dated on the day the result was generated (UTC).
    pub fn report(&self) -> ReportDocument {
        self.report_on(self.result.generated_at.date_naive())
    }

    pub fn report_on(&self, generated_on: NaiveDate) -> ReportDocument {
        let result = self.result;
        ReportDocument {
            title: self.title.to_owned(),
            zone_id: result.zone_id.clone(),
            current_aqi: result.current_aqi().round() as i64,
            improved_aqi: result.new_aqi().round() as i64,
            improvement_percent: result.improvement_percent().round() as i64,
            population_benefited: result.results.population_benefited,
            current_category: result.current_category(),
            improved_category: result.projected_category(),
            generated_on,
        }
    }
}

#[derive(Debug)]
pub struct ReportExporter<'a> {
    result: &'a SimulationResult,
    document: ReportDocument,
}

impl<'a> ReportExporter<'a> {
    pub fn new(result: &'a SimulationResult) -> Self {
        Self::from_document(result, ResultFormatter::new(result).report())
    }

    pub fn from_document(result: &'a SimulationResult, document: ReportDocument) -> Self {
        Self { result, document }
    }

    pub fn document(&self) -> &ReportDocument {
        &self.document
    }

    /// Write the report into `output_dir` and return the written path.
    pub fn export(&self, output_dir: &Path, format: ExportFormat) -> Result<PathBuf, ExportError> {
        if !output_dir.exists() {
            fs::create_dir_all(output_dir)?;
        }

        let path = output_dir.join(self.document.file_name(format));
        match format {
            ExportFormat::Text => fs::write(&path, self.document.render_text())?,
            ExportFormat::Json => {
                let timestamp = self.result.generated_at.to_rfc3339();
                let envelope = ReportEnvelope {
                    timestamp: &timestamp,
                    schema: report_schema(),
                    report: &self.document,
                    data: self.result,
                };
                write_json(&path, &envelope)?;
            }
        }

        info!(zone = %self.document.zone_id, path = %path.display(), "report exported");
        Ok(path)
    }
}

#[derive(Debug, Serialize)]
struct ReportEnvelope<'a> {
    timestamp: &'a str,
    schema: serde_json::Value,
    report: &'a ReportDocument,
    data: &'a SimulationResult,
}

fn write_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<(), ExportError> {
    let serialized = serde_json::to_string_pretty(value)?;
    fs::write(path, serialized)?;
    Ok(())
}

fn report_schema() -> serde_json::Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "AirQualityReport",
        "type": "object",
        "properties": {
            "title": {"type": "string"},
            "zoneId": {"type": "string"},
            "currentAqi": {"type": "integer"},
            "improvedAqi": {"type": "integer"},
            "improvementPercent": {"type": "integer"},
            "populationBenefited": {"type": "integer", "minimum": 0},
            "currentCategory": {"type": "string"},
            "improvedCategory": {"type": "string"},
            "generatedOn": {"type": "string", "format": "date"}
        },
        "required": [
            "zoneId",
            "currentAqi",
            "improvedAqi",
            "improvementPercent",
            "populationBenefited",
            "generatedOn"
        ]
    })
}

fn sanitize_file_component(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() || c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// `10000` -> `10,000`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

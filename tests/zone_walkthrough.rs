//! ---
//! aqs_section: "15-testing-qa-runbook"
//! aqs_subsection: "integration-tests"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Integration and validation tests for the aqsim stack."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
use std::path::PathBuf;

use aqsim_common::AppConfig;
use aqsim_engine::io::{ZoneFile, ZoneSource};
use aqsim_engine::{
    AqiCategory, EngineError, ExportFormat, InterventionKey, SelectionSet, SimulatorSession,
};

fn repo_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join(relative)
}

#[test]
fn shipped_config_points_at_demo_zones() {
    let config = AppConfig::load_with_source(&[repo_path("configs/aqsim.toml")])
        .expect("sample config parses")
        .into_resolved();
    assert_eq!(config.export.format, ExportFormat::Text);
    let zone_file = config.simulation.zone_file.expect("zone file configured");
    assert!(zone_file.is_file(), "{} missing", zone_file.display());
    assert_eq!(ZoneFile::new(zone_file).zones().unwrap().len(), 3);
}

#[test]
fn demo_zones_load_with_categories() {
    let zones = ZoneFile::new(repo_path("demos/zones.yaml"))
        .zones()
        .expect("demo zones load");
    let ids: Vec<_> = zones.iter().map(|zone| zone.zone_id.as_str()).collect();
    assert_eq!(ids, ["abids-road", "charminar", "kukatpally-road"]);
    assert_eq!(zones[0].category(), AqiCategory::VeryUnhealthy);
    assert_eq!(zones[1].category(), AqiCategory::Hazardous);
}

#[test]
fn walkthrough_from_selection_to_report() {
    let source = ZoneFile::new(repo_path("demos/zones.yaml"));
    let baseline = source.zone("charminar").expect("charminar present");
    let mut session = SimulatorSession::open(baseline).expect("valid baseline");

    let first = session.toggle(InterventionKey::BanOpenBurning).clone();
    // 320 * 0.20
    assert!((first.new_aqi() - 256.0).abs() < 1e-9);
    assert_eq!(first.projected_category(), AqiCategory::VeryUnhealthy);

    let everything = session.apply(SelectionSet::all()).clone();
    assert_eq!(everything.new_aqi(), 0.0);
    assert_eq!(everything.improvement_percent(), 100.0);
    assert_eq!(everything.results.population_benefited, 65_000);

    let dir = tempfile::tempdir().unwrap();
    let text = session
        .export(dir.path(), ExportFormat::Text)
        .expect("text export");
    let body = std::fs::read_to_string(&text).unwrap();
    assert!(body.contains("Zone: charminar"));
    assert!(body.contains("Improved AQI: 0 (Good)"));
    assert!(body.contains("People Benefited: 65,000"));

    let json = session
        .export(dir.path(), ExportFormat::Json)
        .expect("json export");
    let envelope: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(json).unwrap()).unwrap();
    assert_eq!(envelope["data"]["zoneId"], "charminar");
}

#[test]
fn unknown_zone_is_reported() {
    let source = ZoneFile::new(repo_path("demos/zones.yaml"));
    let err = source.zone("secunderabad").unwrap_err();
    assert!(matches!(err, EngineError::UnknownZone(ref id) if id == "secunderabad"));
}

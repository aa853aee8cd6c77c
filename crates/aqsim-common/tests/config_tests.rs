//! ---
//! aqs_section: "01-core-functionality"
//! aqs_subsection: "integration-tests"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Configuration discovery and tracing setup checks."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
use std::env;
use std::fs;

use aqsim_common::config::AppConfig;
use aqsim_common::logging::{init_tracing, LogFormat};
use aqsim_common::LoggingConfig;
use aqsim_engine::ExportFormat;

// Environment override checks share one test to avoid racing on AQSIM_CONFIG.
#[test]
fn config_discovery() {
    env::remove_var(AppConfig::ENV_CONFIG_PATH);
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let present = dir.path().join("aqsim.toml");
    fs::write(&present, "[export]\nformat = \"json\"\n").unwrap();

    assert!(AppConfig::load_optional(&[&missing]).unwrap().is_none());
    let err = AppConfig::load(&[&missing]).unwrap_err();
    assert!(err.to_string().contains("no configuration files found"));

    let loaded = AppConfig::load_with_source(&[&missing, &present]).unwrap();
    assert_eq!(loaded.source, present);
    assert_eq!(loaded.config.export.format, ExportFormat::Json);

    let override_path = dir.path().join("override.toml");
    fs::write(&override_path, "[export]\ndirectory = \"elsewhere\"\n").unwrap();
    env::set_var(AppConfig::ENV_CONFIG_PATH, &override_path);
    let loaded = AppConfig::load_with_source(&[&present]).unwrap();
    env::remove_var(AppConfig::ENV_CONFIG_PATH);
    assert_eq!(loaded.source, override_path);
    assert_eq!(loaded.config.export.directory.to_str(), Some("elsewhere"));

    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "[export\n").unwrap();
    let err = AppConfig::load(&[&broken]).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse config file"));
}

#[test]
fn tracing_creates_log_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        directory: dir.path().join("logs"),
        format: LogFormat::StructuredJson,
        file_prefix: Some("aqsim-test".into()),
    };
    init_tracing("aqsim-test", &config).unwrap();
    assert!(config.directory.is_dir());
}

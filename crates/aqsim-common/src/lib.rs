//! ---
//! aqs_section: "01-core-functionality"
//! aqs_subsection: "module"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Shared primitives and utilities for the simulator."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
//! Configuration loading, tracing initialisation, and version metadata shared
//! by the aqsim binaries.

pub mod config;
pub mod logging;
pub mod version;

pub use config::{AppConfig, ExportConfig, LoadedAppConfig, LoggingConfig, SimulationConfig};
pub use logging::{init_tracing, LogFormat};
pub use version::VersionInfo;

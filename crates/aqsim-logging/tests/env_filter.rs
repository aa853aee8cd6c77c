//! ---
//! aqs_section: "03-logging"
//! aqs_subsection: "integration-tests"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Environment-driven verbosity for the development subscriber."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
use tracing::Level;

// Only test in this binary: it installs the global subscriber.
#[test]
fn init_honours_environment_verbosity() {
    std::env::set_var("RUST_LOG", "warn");
    std::env::set_var(aqsim_logging::LOG_ENV, "debug");
    aqsim_logging::init();

    assert!(tracing::enabled!(Level::DEBUG));
    assert!(tracing::enabled!(Level::INFO));
    assert!(!tracing::enabled!(Level::TRACE));
}

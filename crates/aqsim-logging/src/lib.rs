//! ---
//! aqs_section: "03-logging"
//! aqs_subsection: "module"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Structured logging adapters for simulator components."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
#![warn(missing_docs)]
//! Logging context and lifecycle events shared by the engine and the CLI.

use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter, Registry};

pub mod macros;

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "AQSIM_LOG";
/// Filter used when neither variable is set.
pub const DEFAULT_FILTER: &str = "info";

/// Build the event filter from `AQSIM_LOG`, then `RUST_LOG`, then `info`.
///
/// An unparsable directive is reported on stderr and replaced by the default.
pub fn env_filter() -> EnvFilter {
    let directive = select_directive(
        std::env::var(LOG_ENV).ok(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    );
    EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!(
            "invalid log directive '{}' ({}); defaulting to {} logging",
            directive, err, DEFAULT_FILTER
        );
        EnvFilter::new(DEFAULT_FILTER)
    })
}

fn select_directive(aqsim_log: Option<String>, rust_log: Option<String>) -> String {
    let set = |value: Option<String>| value.filter(|directive| !directive.trim().is_empty());
    set(aqsim_log)
        .or_else(|| set(rust_log))
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}

/// Initialize a baseline tracing subscriber for development and tests.
///
/// Output goes to stderr so command output on stdout stays machine-readable.
pub fn init() {
    let _ = Registry::default()
        .with(env_filter())
        .with(subscriber_fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Structured logging context propagated by the convenience macros.
#[derive(Debug, Default, Clone)]
pub struct LogContext<'a> {
    /// Zone identifier the event relates to.
    pub zone: Option<&'a str>,
    /// Free-form scenario label (for example a CLI invocation or session name).
    pub scenario: Option<&'a str>,
    /// Number of interventions selected when the event fired.
    pub selections: Option<usize>,
}

impl<'a> LogContext<'a> {
    /// Create an empty logging context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a zone identifier.
    pub fn with_zone(mut self, zone: &'a str) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Attach a scenario label.
    pub fn with_scenario(mut self, scenario: &'a str) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Attach the current selection count.
    pub fn with_selections(mut self, selections: usize) -> Self {
        self.selections = Some(selections);
        self
    }
}

/// High-level outcome used when emitting lifecycle log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemEventOutcome {
    /// The operation completed successfully.
    Success,
    /// The operation failed; the failure was reported to the user.
    Fault,
}

impl SystemEventOutcome {
    fn as_str(&self) -> &'static str {
        match self {
            SystemEventOutcome::Success => "success",
            SystemEventOutcome::Fault => "fault",
        }
    }
}

/// Emit a standardized system event with a success/fault outcome.
pub fn log_system_event(
    context: Option<&LogContext>,
    event: &str,
    message: &str,
    outcome: SystemEventOutcome,
) {
    let default_ctx = LogContext::default();
    let ctx = context.unwrap_or(&default_ctx);
    let zone = ctx.zone.unwrap_or("");
    let scenario = ctx.scenario.unwrap_or("");
    let selections = ctx.selections.unwrap_or_default();
    match outcome {
        SystemEventOutcome::Success => tracing::info!(
            event,
            outcome = outcome.as_str(),
            zone,
            scenario,
            selections,
            message = %message
        ),
        SystemEventOutcome::Fault => tracing::error!(
            event,
            outcome = outcome.as_str(),
            zone,
            scenario,
            selections,
            message = %message
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macros_emit_without_panic() {
        init();
        let ctx = LogContext::new()
            .with_zone("abids-road")
            .with_selections(3);
        aq_info!(context = ctx.clone(), "simulation recomputed");
        aq_debug!("debug message");
        aq_warn!(context = ctx.clone(), "unknown key {}", "flyingCars");
        aq_error!(context = ctx, "export failed: {}", "disk full");
    }

    #[test]
    fn directive_prefers_aqsim_log() {
        assert_eq!(
            select_directive(Some("debug".into()), Some("warn".into())),
            "debug"
        );
        assert_eq!(select_directive(None, Some("warn".into())), "warn");
        assert_eq!(select_directive(None, None), DEFAULT_FILTER);
        assert_eq!(
            select_directive(Some("  ".into()), Some("warn".into())),
            "warn"
        );
    }

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }

    #[test]
    fn system_event_helper_emits() {
        init();
        let ctx = LogContext::new()
            .with_zone("charminar")
            .with_scenario("unit-test");
        log_system_event(
            Some(&ctx),
            "report.export",
            "report written",
            SystemEventOutcome::Success,
        );
        log_system_event(
            None,
            "report.export",
            "no simulation result",
            SystemEventOutcome::Fault,
        );
    }
}

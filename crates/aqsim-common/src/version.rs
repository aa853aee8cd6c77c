//! ---
//! aqs_section: "01-core-functionality"
//! aqs_subsection: "module"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Shared primitives and utilities for the simulator."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
const PRODUCT: &str = "aqsim";
const UNKNOWN: &str = "unknown";

/// Build metadata reported by `--version`, emitted at compile time by vergen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub product: &'static str,
    pub semver: &'static str,
    pub commit: &'static str,
    pub build_timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
}

impl VersionInfo {
    pub fn current() -> Self {
        Self {
            product: PRODUCT,
            semver: env!("CARGO_PKG_VERSION"),
            commit: option_env!("VERGEN_GIT_SHA").unwrap_or(UNKNOWN),
            build_timestamp: option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or(UNKNOWN),
            target: option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or(UNKNOWN),
            profile: profile_name(option_env!("VERGEN_CARGO_DEBUG")),
        }
    }

    pub fn short(&self) -> String {
        format!("{} {}", self.product, self.semver)
    }

    pub fn extended(&self) -> String {
        format!(
            "{} {} (commit {}, {} build for {}, built {})",
            self.product, self.semver, self.commit, self.profile, self.target, self.build_timestamp
        )
    }
}

fn profile_name(cargo_debug: Option<&str>) -> &'static str {
    match cargo_debug {
        Some("true") => "debug",
        Some(_) => "release",
        None => UNKNOWN,
    }
}

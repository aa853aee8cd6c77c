//! ---
//! aqs_section: "01-core-functionality"
//! aqs_subsection: "module"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Build metadata emission for version reporting."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Outside a git checkout vergen emits placeholder values with a warning.
    EmitBuilder::builder()
        .all_build()
        .all_cargo()
        .all_git()
        .emit()?;

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}

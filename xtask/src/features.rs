use std::process::Command;

use anyhow::{Context, Result};

const CRATE: &str = "fragnet-common";

/// Feature sets of `fragnet-common` that must build on their own.
const FEATURE_COMBINATIONS: &[&[&str]] = &[
    &[], // default: no runtime modules
    &["runtime"],
    &["test-utils"],
];

/// Check that all required feature combinations compile successfully.
pub fn test_feature_matrix() -> Result<()> {
    println!("Testing {} {CRATE} feature combinations...", FEATURE_COMBINATIONS.len());

    for (index, features) in FEATURE_COMBINATIONS.iter().enumerate() {
        let label = if features.is_empty() { "default".to_string() } else { features.join(",") };

        println!(
            "\n[{}/{}] cargo check -p {CRATE} --no-default-features --features '{label}'",
            index + 1,
            FEATURE_COMBINATIONS.len(),
        );

        let mut command = Command::new("cargo");
        command.args(["check", "-p", CRATE, "--no-default-features"]);
        if !features.is_empty() {
            command.arg("--features").arg(features.join(","));
        }

        let status = command
            .status()
            .with_context(|| format!("Failed to run cargo check for '{label}'"))?;

        if !status.success() {
            anyhow::bail!("Feature combination '{label}' failed to compile");
        }

        println!("✅ Features '{label}' compiled successfully");
    }

    println!("\n✅ All {} feature combinations compile successfully!", FEATURE_COMBINATIONS.len());

    Ok(())
}

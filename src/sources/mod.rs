pub mod docker;
pub mod file;
pub mod nerdctl;
pub mod source;

pub use docker::DockerSource;
pub use file::FileSource;
pub use nerdctl::NerdctlSource;
pub use source::Source;

use anyhow::{anyhow, Context, Result};
use std::process::Command;

/// Runs an engine CLI and returns its stdout.
///
/// A non-zero exit becomes an error carrying the engine's stderr, so "no such
/// container" surfaces to the caller as the engine phrased it.
pub(crate) fn run_engine_command(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .context(format!("Failed to execute {} command: {:?}", program, args))?;

    if !output.status.success() {
        let error = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!("{} command failed: {}", program, error.trim()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Fails unless `program --version` runs successfully.
pub(crate) fn ensure_engine_available(program: &str) -> Result<()> {
    let output = Command::new(program)
        .arg("--version")
        .output()
        .context(format!(
            "Failed to execute {} command. Is {} installed?",
            program, program
        ))?;

    if !output.status.success() {
        return Err(anyhow!("{} is not available", program));
    }

    Ok(())
}

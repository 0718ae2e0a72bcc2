use anyhow::{Context, Result};

use super::{ensure_engine_available, run_engine_command, Source};
use crate::inspect::InspectedContainer;
use crate::notifier::Notifier;

/// Docker implementation of the Source trait
pub struct DockerSource;

impl DockerSource {
    pub fn new() -> Result<Self> {
        ensure_engine_available("docker")
            .context("Docker is required. Is Docker installed and running?")?;
        Ok(Self)
    }
}

impl Source for DockerSource {
    fn name(&self) -> &str {
        "docker"
    }

    fn inspect(&self, identifier: &str, notifier: &Notifier) -> Result<InspectedContainer> {
        notifier.debug(&format!("Running docker container inspect {}", identifier));
        let output = run_engine_command("docker", &["container", "inspect", identifier])?;

        InspectedContainer::from_inspect_json(&output)
            .context(format!("Failed to read docker inspect output for {}", identifier))
    }
}

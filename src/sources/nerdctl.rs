use anyhow::{Context, Result};

use super::{ensure_engine_available, run_engine_command, Source};
use crate::inspect::InspectedContainer;
use crate::notifier::Notifier;

/// nerdctl implementation of the Source trait.
///
/// Uses `--mode=dockercompat` so the record has Docker's shape.
pub struct NerdctlSource;

impl NerdctlSource {
    pub fn new() -> Result<Self> {
        ensure_engine_available("nerdctl")?;
        Ok(Self)
    }
}

impl Source for NerdctlSource {
    fn name(&self) -> &str {
        "nerdctl"
    }

    fn inspect(&self, identifier: &str, notifier: &Notifier) -> Result<InspectedContainer> {
        notifier.debug(&format!("Running nerdctl container inspect {}", identifier));
        let output = run_engine_command(
            "nerdctl",
            &["container", "inspect", "--mode=dockercompat", identifier],
        )?;

        InspectedContainer::from_inspect_json(&output)
            .context(format!("Failed to read nerdctl inspect output for {}", identifier))
    }
}

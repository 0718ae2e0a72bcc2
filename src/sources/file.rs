use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::Source;
use crate::inspect::InspectedContainer;
use crate::notifier::Notifier;

/// Reads saved `docker inspect` output from disk instead of asking an engine.
///
/// Each identifier is a path to a file holding either the JSON array the engine
/// prints or a single record object.
#[derive(Debug, Default)]
pub struct FileSource;

impl FileSource {
    pub fn new() -> Self {
        Self
    }
}

impl Source for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn inspect(&self, identifier: &str, notifier: &Notifier) -> Result<InspectedContainer> {
        let path = Path::new(identifier);
        notifier.debug(&format!("Reading inspect record from {}", path.display()));

        let content = fs::read_to_string(path)
            .context(format!("Failed to read inspect file: {}", path.display()))?;

        InspectedContainer::from_inspect_json(&content)
            .context(format!("Failed to parse inspect file: {}", path.display()))
    }
}

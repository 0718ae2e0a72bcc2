//! End-to-end "running containers → Compose project" pipeline.
//!
//! This module provides [`ComposeGenerator`], which:
//! - asks a concrete [`crate::sources::Source`] for each container's inspect record,
//! - derives a unique service name and runs the field mappers through the assembler,
//! - and aggregates the services into one [`ProjectSpec`].
//!
//! Containers are handled strictly one at a time in input order: synthesized names
//! depend on the services already inserted. The first inspect failure aborts the
//! run with no partial project.

use crate::assembler::assemble_service;
use crate::compose::ProjectSpec;
use crate::mapping::service_name;
use crate::notifier::Notifier;
use crate::sources::Source;
use anyhow::{anyhow, Result};
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Project-level overrides supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct ProjectOptions {
    pub name: Option<String>,
    pub working_dir: Option<String>,
}

/// Shared flag that stops a run before its next inspect call.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Working directory override, or the process's current directory.
///
/// A failed lookup is not fatal: it is reported and yields an empty string.
pub fn resolve_working_dir(working_dir: Option<&str>, notifier: &Notifier) -> String {
    if let Some(dir) = working_dir.filter(|dir| !dir.is_empty()) {
        return dir.to_string();
    }

    match env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(e) => {
            notifier.warn(&format!("Unable to get working directory: {}", e));
            String::new()
        }
    }
}

/// Generates a Compose project from running containers of a concrete [`Source`].
pub struct ComposeGenerator<S: Source> {
    source: S,
    notifier: Notifier,
}

impl<S: Source> ComposeGenerator<S> {
    pub fn new(source: S, notifier: Notifier) -> Self {
        Self { source, notifier }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Inspects every identifier in order and aggregates one service per container.
    ///
    /// # Errors
    /// - `identifiers` is empty.
    /// - Any inspect call fails; the source's error is returned as-is (the identifier
    ///   is logged, not wrapped in) and nothing is produced.
    /// - `cancel` was set before one of the inspect calls.
    ///
    /// Two containers that map to the same service name are not an error: the later
    /// one replaces the earlier one and a warning is printed.
    pub fn generate(
        &self,
        identifiers: &[String],
        options: &ProjectOptions,
        cancel: &CancellationToken,
    ) -> Result<ProjectSpec> {
        if identifiers.is_empty() {
            return Err(anyhow!("At least one container is required"));
        }

        let name = options.name.clone().unwrap_or_default();
        let working_dir = resolve_working_dir(options.working_dir.as_deref(), &self.notifier);
        self.notifier.debug(&format!(
            "Project name: {:?}, working directory: {:?}",
            name, working_dir
        ));

        let mut project = ProjectSpec::new(name, working_dir);
        let progress_bar = self
            .notifier
            .create_progress_bar(identifiers.len() as u64, "Inspecting containers");
        let total = identifiers.len() as u64;

        for (index, identifier) in identifiers.iter().enumerate() {
            if cancel.is_cancelled() {
                return Err(anyhow!(
                    "Cancelled before inspecting container {}",
                    identifier
                ));
            }

            self.notifier.info(&format!(
                "Inspecting container {} with {} source",
                identifier,
                self.source.name()
            ));
            let container = match self.source.inspect(identifier, &self.notifier) {
                Ok(container) => container,
                Err(e) => {
                    self.notifier
                        .error(&format!("Failed to inspect container: {}", identifier));
                    return Err(e);
                }
            };

            let name = service_name(&container.name, index, |candidate| {
                project.contains_service(candidate)
            });
            let service = assemble_service(&container, name, &self.notifier);

            if let Some(displaced) = project.insert_service(service) {
                self.notifier.warn(&format!(
                    "Service name {} is used by more than one container; keeping the one from {}",
                    displaced.name, identifier
                ));
            }

            if let Some(progress_bar) = &progress_bar {
                progress_bar.inc(1);
            }
            self.notifier
                .progress(index as u64 + 1, total, "Inspected containers");
        }

        if let Some(progress_bar) = progress_bar {
            progress_bar.finish_and_clear();
        }
        self.notifier.finish();

        Ok(project)
    }
}

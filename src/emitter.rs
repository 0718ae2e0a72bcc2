use crate::compose::ProjectSpec;
use crate::notifier::Notifier;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Serializes the whole project in `format`.
pub fn render(project: &ProjectSpec, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(project).context("Failed to serialize project as YAML")
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(project)
                .context("Failed to serialize project as JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Renders as much of the project as possible.
///
/// When the full document fails to serialize, each service is tried on its own
/// and the ones that fail are dropped with a warning. Only if even that fails is
/// the result empty.
pub fn render_best_effort(project: &ProjectSpec, format: OutputFormat, notifier: &Notifier) -> String {
    best_effort(project, |p: &ProjectSpec| render(p, format), notifier)
}

fn best_effort<F>(project: &ProjectSpec, render: F, notifier: &Notifier) -> String
where
    F: Fn(&ProjectSpec) -> Result<String>,
{
    let error = match render(project) {
        Ok(document) => return document,
        Err(e) => e,
    };
    notifier.warn(&format!("{:#}", error));

    let mut partial = ProjectSpec::new(project.name.as_str(), project.working_dir.as_str());
    for service in project.services.values() {
        let mut single = ProjectSpec::new("", "");
        single.insert_service(service.clone());
        match render(&single) {
            Ok(_) => {
                partial.insert_service(service.clone());
            }
            Err(e) => notifier.warn(&format!("Dropping service {}: {:#}", service.name, e)),
        }
    }

    render(&partial).unwrap_or_else(|e| {
        notifier.error(&format!("Unable to produce any output: {:#}", e));
        String::new()
    })
}

/// Writes the project document to `out`.
///
/// Serialization problems are reported and never fail the call; only a failed
/// write does.
pub fn emit<W: Write>(
    project: &ProjectSpec,
    format: OutputFormat,
    out: &mut W,
    notifier: &Notifier,
) -> Result<()> {
    emit_with(project, |p: &ProjectSpec| render(p, format), out, notifier)
}

fn emit_with<F, W>(project: &ProjectSpec, render: F, out: &mut W, notifier: &Notifier) -> Result<()>
where
    F: Fn(&ProjectSpec) -> Result<String>,
    W: Write,
{
    let document = best_effort(project, render, notifier);
    out.write_all(document.as_bytes())
        .context("Failed to write generated document")?;
    out.flush().context("Failed to flush generated document")?;
    Ok(())
}

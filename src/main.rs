use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use std::io;

use container2compose::emitter::{self, OutputFormat};
use container2compose::{
    CancellationToken, ComposeGenerator, DockerSource, FileSource, NerdctlSource, Notifier,
    ProjectOptions, Source,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Engine {
    Docker,
    Nerdctl,
    /// Read saved `docker inspect` output; each argument is a file path
    File,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(
        required = true,
        help = "Containers to include (IDs or names, or inspect files with --engine file)"
    )]
    containers: Vec<String>,

    #[arg(short = 'p', long, help = "Project name")]
    project_name: Option<String>,

    #[arg(
        short,
        long,
        help = "Project working directory (defaults to the current directory)"
    )]
    workdir: Option<String>,

    #[arg(
        short,
        long,
        value_enum,
        default_value = "docker",
        help = "Container engine to use"
    )]
    engine: Engine,

    #[arg(
        short,
        long,
        value_enum,
        default_value = "yaml",
        help = "Output format"
    )]
    format: OutputFormat,

    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Verbose mode (-v for info, -vv for debug, -vvv for trace). Also switches off the spinner"
    )]
    verbose: u8,
}

fn run<S: Source>(source: S, cli: &Cli, notifier: Notifier) -> Result<()> {
    let options = ProjectOptions {
        name: cli.project_name.clone(),
        working_dir: cli.workdir.clone(),
    };

    let generator = ComposeGenerator::new(source, notifier);
    let project = generator.generate(&cli.containers, &options, &CancellationToken::new())?;

    let stdout = io::stdout();
    emitter::emit(&project, cli.format, &mut stdout.lock(), generator.notifier())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let notifier = Notifier::new(cli.verbose);

    notifier.info(&format!(
        "Generating compose project from {} container(s)",
        cli.containers.len()
    ));
    notifier.debug(&format!("Engine: {:?}", cli.engine));
    notifier.debug(&format!("Containers: {:?}", cli.containers));

    match cli.engine {
        Engine::Docker => {
            notifier.debug("Initializing Docker source");
            let source = DockerSource::new()
                .map_err(|e| anyhow!("Failed to initialize Docker source: {:#}", e))?;
            run(source, &cli, notifier)
        }
        Engine::Nerdctl => {
            notifier.debug("Initializing nerdctl source");
            let source = NerdctlSource::new()
                .map_err(|e| anyhow!("Failed to initialize nerdctl source: {:#}", e))?;
            run(source, &cli, notifier)
        }
        Engine::File => run(FileSource::new(), &cli, notifier),
    }
}

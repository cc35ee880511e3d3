//! coregen CLI - generate per-scheme source trees from templates.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use coregen::generator::{GeneratorConfig, LocalFs, Orchestrator, SelectionReader, SessionReport};
use coregen::params::CATALOG;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::{Command, ExitCode};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Curve, pairing and RSA source generator
#[derive(Parser)]
#[command(name = "coregen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How selections are read
    #[arg(value_enum, default_value = "interactive")]
    mode: Mode,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Template directory (overrides the configuration)
    #[arg(short, long)]
    templates: Option<PathBuf>,

    /// Output root (overrides the configuration)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Selection file read in test mode (overrides the configuration)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Skip the build step in test mode
    #[arg(long)]
    no_build: bool,

    /// Print the scheme menu and exit
    #[arg(long)]
    list: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Prompt for selectors on standard input
    Interactive,
    /// Read selectors from the input file, then build the generated project
    Test,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(dir) = &cli.templates {
        config = config.with_template_dir(dir);
    }
    if let Some(dir) = &cli.output {
        config = config.with_output_root(dir);
    }
    if let Some(path) = &cli.input {
        config = config.with_test_input(path);
    }
    Ok(config)
}

/// Print the catalog grouped by scheme kind
fn print_menu() {
    let mut current = None;
    for entry in CATALOG.iter() {
        let kind = entry.scheme.kind();
        if current != Some(kind) {
            println!("\n{kind}");
            current = Some(kind);
        }
        println!("{:>3}. {}", entry.id, entry.label);
    }
    println!();
}

fn print_summary(report: &SessionReport) {
    let kinds: Vec<String> = report
        .kinds_selected()
        .iter()
        .map(ToString::to_string)
        .collect();
    if kinds.is_empty() {
        println!("No schemes selected");
    } else {
        println!("Selected: {}", kinds.join(", "));
    }

    for scheme in report.succeeded() {
        println!("  {} ({} files)", scheme.name, scheme.files.len());
    }
    for error in report.rejected() {
        eprintln!("  skipped input [{}]: {error}", error.kind());
    }
    for (id, name, error) in report.failed() {
        eprintln!("  {id}. {name} FAILED [{}]: {error}", error.kind());
    }
}

/// Run the configured build command inside the output root
fn run_build(config: &GeneratorConfig) -> Result<bool> {
    let Some((program, args)) = config.build_command.split_first() else {
        bail!("Build command is empty");
    };
    info!(program = %program, root = %config.output_root.display(), "building");
    let status = Command::new(program)
        .args(args)
        .current_dir(&config.output_root)
        .status()
        .with_context(|| format!("Failed to run {program}"))?;
    if !status.success() {
        eprintln!("Build failed: {status}");
    }
    Ok(status.success())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list {
        print_menu();
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    let fs = LocalFs;
    let orchestrator = Orchestrator::new(&config, &fs);

    let report = match cli.mode {
        Mode::Interactive => {
            print_menu();
            let mut reader = SelectionReader::interactive(io::stdin().lock(), io::stdout());
            orchestrator.run(&mut reader)
        }
        Mode::Test => {
            let file = File::open(&config.test_input).with_context(|| {
                format!("Failed to open selection file {}", config.test_input.display())
            })?;
            let mut reader = SelectionReader::batch(BufReader::new(file));
            orchestrator.run(&mut reader)
        }
    }
    .context("Failed to prepare the output tree")?;

    print_summary(&report);

    let mut success = report.is_success();
    if let Some(error) = &report.closing_error {
        eprintln!("Failed to copy shared tests [{}]: {error}", error.kind());
    } else if cli.mode == Mode::Test && !cli.no_build {
        success &= run_build(&config)?;
    }

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

//! authorgen command-line tool.
//!
//! Reads the authorship history of a git repository and prints the Go source
//! of the application's contributor list. With no arguments it reads the
//! repository containing the current directory and writes to stdout; the
//! output is meant to be redirected into a source file.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use authorgen_core::config::{GeneratorConfig, HistoryBackend};
use authorgen_core::render::DEFAULT_PACKAGE;
use authorgen_core::AuthorListGenerator;

// ---------------------------------------------------------------------------
// CLI argument definitions
// ---------------------------------------------------------------------------

/// Generate the contributor list source from git history.
#[derive(Parser, Debug)]
#[command(
    name = "authorgen",
    version,
    about = "Generate the about-screen contributor list from git history"
)]
struct Cli {
    /// Directory inside the repository to read.
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Go package clause of the generated file.
    #[arg(long, default_value = DEFAULT_PACKAGE)]
    package: String,

    /// TOML file with extra `[aliases]` entries.
    #[arg(long)]
    aliases: Option<PathBuf>,

    /// History backend: cli or git2.
    #[arg(long, default_value_t = HistoryBackend::Cli)]
    backend: HistoryBackend,

    /// Write the generated source here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            repo_path: self.repo.clone(),
            package: self.package.clone(),
            alias_file: self.aliases.clone(),
            backend: self.backend,
        }
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the generated source.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.generator_config();
    let generator =
        AuthorListGenerator::from_config(&config).context("invalid generator configuration")?;
    let source = generator.generate().with_context(|| {
        format!(
            "failed to generate author list from {}",
            config.repo_path.display()
        )
    })?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &source)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote author list");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(source.as_bytes())
                .context("failed to write to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
    }
    Ok(())
}

#![warn(missing_docs)]
//! Racebench CLI Library
//!
//! This module provides the command-line infrastructure for the harness.
//! Use `racebench::run()` (or `racebench_cli::run()`) in your main function
//! to get configuration discovery, corpus loading, the trial loop, and
//! report rendering.
//!
//! # Example
//!
//! ```ignore
//! fn main() {
//!     if let Err(e) = racebench_cli::run() {
//!         eprintln!("Error: {e:#}");
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod config;
mod orchestrator;

pub use config::{CorpusConfig, HarnessConfig, OutputConfig, RunConfig};
pub use orchestrator::{Orchestrator, Phase};

use anyhow::Context;
use clap::Parser;
use racebench_core::{Corpus, WallClock, pin_to_cpu};
use racebench_report::{
    OutputFormat, ReportMeta, build_report, generate_csv_report, generate_json_report,
    render_human,
};
use std::io::Write;
use std::path::PathBuf;

/// Racebench CLI arguments.
#[derive(Parser, Debug, Default)]
#[command(name = "racebench")]
#[command(author, version, about = "Racebench - container shape latency races")]
pub struct Cli {
    /// Corpus file, one record per line (default: racebench.toml or codes.txt)
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Number of trials to average over (default: racebench.toml or 15)
    #[arg(long, short = 't')]
    pub trials: Option<usize>,

    /// Output format: human, json, csv
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pin the harness thread to this CPU core
    #[arg(long)]
    pub pin_cpu: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the harness with arguments from the process command line.
///
/// # Returns
/// `Ok(())` on normal completion; an error when the configuration is
/// invalid or the corpus source is unavailable.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(Cli::parse())
}

/// Run the harness with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    let filter = if cli.verbose {
        "racebench=debug"
    } else {
        "racebench=info"
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    // Discover racebench.toml configuration (CLI flags override)
    let config = HarnessConfig::discover().unwrap_or_default();

    let trials = cli.trials.unwrap_or(config.run.trials);
    anyhow::ensure!(trials >= 1, "trial count must be at least 1, got {trials}");

    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()
        .map_err(anyhow::Error::msg)?;

    let corpus_path = cli
        .corpus
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.corpus.path));

    // An unavailable corpus aborts the run before any trial: averaged
    // timings over a silently substituted empty corpus would be
    // meaningless.
    let corpus = Corpus::load(&corpus_path).context("failed to load corpus")?;
    if corpus.is_empty() {
        tracing::warn!(
            path = %corpus_path.display(),
            "corpus is empty; every measurement will be degenerate"
        );
    } else {
        tracing::info!(
            records = corpus.len(),
            path = %corpus_path.display(),
            "corpus loaded"
        );
    }

    if let Some(cpu) = cli.pin_cpu.or(config.run.pin_cpu) {
        match pin_to_cpu(cpu) {
            Ok(()) => tracing::debug!(cpu, "pinned harness thread"),
            Err(e) => tracing::warn!(cpu, error = %e, "failed to pin harness thread"),
        }
    }

    tracing::info!(trials, "starting trials");
    let mut orchestrator = Orchestrator::new(trials, WallClock).with_progress();
    let aggregated = orchestrator.run(&corpus)?;

    let meta = ReportMeta::new(trials, corpus_path.display().to_string(), corpus.len());
    let report = build_report(&aggregated, meta);

    let output = match format {
        OutputFormat::Human => render_human(&report),
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Csv => generate_csv_report(&report),
    };

    let out_path = cli
        .output
        .clone()
        .or_else(|| config.output.path.as_ref().map(PathBuf::from));
    if let Some(ref path) = out_path {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("failed to create report file {}", path.display()))?;
        file.write_all(output.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_leave_everything_to_the_config() {
        let cli = Cli::parse_from(["racebench"]);
        assert!(cli.corpus.is_none());
        assert!(cli.trials.is_none());
        assert!(cli.format.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn cli_flags_parse() {
        let cli = Cli::parse_from([
            "racebench",
            "--corpus",
            "records.txt",
            "-t",
            "3",
            "--format",
            "json",
            "--pin-cpu",
            "1",
        ]);
        assert_eq!(cli.corpus.as_deref(), Some(std::path::Path::new("records.txt")));
        assert_eq!(cli.trials, Some(3));
        assert_eq!(cli.format.as_deref(), Some("json"));
        assert_eq!(cli.pin_cpu, Some(1));
    }

    #[test]
    fn zero_trials_is_rejected() {
        let cli = Cli {
            trials: Some(0),
            ..Default::default()
        };
        let err = run_with_cli(cli).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let cli = Cli {
            format: Some("yaml".to_string()),
            trials: Some(1),
            ..Default::default()
        };
        let err = run_with_cli(cli).unwrap_err();
        assert!(err.to_string().contains("Unknown output format"));
    }
}

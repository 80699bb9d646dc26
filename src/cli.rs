//
// cli.rs
// Dicom-Scanner-rs
//
// Defines the CLI surface with Clap, sets up logging, and drives one scan from study directory to input.json.
//
// Thales Matheus Mendonça Santos - November 2025

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn, Level};

use crate::config::{ScanConfig, DEFAULT_OUTPUT_FILE};
use crate::json;
use crate::models::ScanOutcome;
use crate::scanner::Scanner;

/// Command-line interface: one study directory in, one JSON index out.
#[derive(Parser, Debug)]
#[command(name = "dicom-scanner")]
#[command(
    about = "Index a study directory (series/instances) into input.json",
    long_about = None
)]
pub struct Cli {
    /// Study data directory; each subdirectory is a series
    pub study_dir: PathBuf,
    /// Where to write the index, relative to the current directory
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,
    /// Also scan entries whose names start with a dot
    #[arg(long)]
    pub include_hidden: bool,
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> ScanConfig {
        ScanConfig::default()
            .include_hidden(self.include_hidden)
            .output(&self.output)
    }
}

pub fn run() -> anyhow::Result<()> {
    // Parse the raw CLI arguments once; clap exits non-zero on usage errors.
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run_with(&cli).map(|_| ())
}

/// Scan and write the index. Nothing is written if the study directory is unusable.
pub fn run_with(cli: &Cli) -> anyhow::Result<ScanOutcome> {
    let config = cli.config();
    let scanner = Scanner::new(config);

    let outcome = scanner.scan(&cli.study_dir).with_context(|| {
        format!(
            "Error opening study data directory: {}",
            cli.study_dir.display()
        )
    })?;

    let output = &scanner.config().output;
    info!("Write {}", output.display());
    json::write_index(&outcome.index, output).context("Failed to write study index")?;

    info!(
        "Indexed {} series / {} instances",
        outcome.series_count(),
        outcome.instance_count()
    );
    if !outcome.skipped.is_empty() {
        warn!("Skipped {} unreadable entries", outcome.skipped.len());
    }
    info!("Finished");

    Ok(outcome)
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn study_dir_is_required() {
        assert!(Cli::try_parse_from(["dicom-scanner"]).is_err());
    }

    #[test]
    fn defaults_write_input_json() {
        let cli = Cli::try_parse_from(["dicom-scanner", "study"]).unwrap();
        assert_eq!(cli.study_dir, PathBuf::from("study"));
        assert_eq!(cli.config(), ScanConfig::default());
    }

    #[test]
    fn flags_reach_the_config() {
        let cli = Cli::try_parse_from([
            "dicom-scanner",
            "study",
            "--output",
            "out/index.json",
            "--include-hidden",
            "-v",
        ])
        .unwrap();
        let config = cli.config();
        assert!(config.include_hidden);
        assert_eq!(config.output, PathBuf::from("out/index.json"));
        assert!(cli.verbose);
    }
}

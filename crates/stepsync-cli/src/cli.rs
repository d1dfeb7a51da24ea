//! Argument parsing and command flow for the `stepsync` binary.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use eyre::{Result, WrapErr, bail};
use tracing::debug;

use stepsync::{LogLevel, SyncConfig, SyncReport, sync_feature};

use crate::logging::init_logging;
use crate::output::{write_json_report, write_text_report};

/// Append missing cucumber-js step stubs for a feature file.
#[derive(Parser, Debug)]
#[command(name = "stepsync", author, version, about)]
pub(crate) struct Cli {
    /// Feature file name, resolved inside the features directory.
    pub(crate) feature: String,

    /// Directory containing feature files (defaults to
    /// `$STEPSYNC_FEATURES_DIR`, then `features`).
    #[arg(long, value_name = "DIR")]
    pub(crate) features_dir: Option<PathBuf>,

    /// Directory containing step definition files (defaults to
    /// `$STEPSYNC_STEPS_DIR`, then `steps`).
    #[arg(long, value_name = "DIR")]
    pub(crate) steps_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, or error (defaults to
    /// `$STEPSYNC_LOG_LEVEL`, then `info`).
    #[arg(long, value_name = "LEVEL")]
    pub(crate) log_level: Option<LogLevel>,

    /// Emit a JSON report instead of human-readable text.
    #[arg(long)]
    pub(crate) json: bool,
}

/// Parse arguments, resolve configuration, and run the synchronisation.
///
/// # Errors
///
/// Returns an error when configuration is invalid, the features directory or
/// feature file is missing, or synchronisation fails.
pub(crate) fn run() -> Result<()> {
    let cli = parse_or_exit();
    let config = SyncConfig::from_env()?.apply_overrides(
        cli.features_dir.clone(),
        cli.steps_dir.clone(),
        cli.log_level,
    );
    init_logging(&config);

    let report = execute(&cli, &config)?;

    let mut stdout = io::stdout();
    if cli.json {
        write_json_report(&mut stdout, &report)
    } else {
        write_text_report(&mut stdout, &report)
    }
}

/// Parse the command line, exiting directly on errors and informational
/// output.
///
/// Usage errors exit with status 1; `--help` and `--version` print to stdout
/// and exit with status 0.
fn parse_or_exit() -> Cli {
    Cli::try_parse().unwrap_or_else(|err| {
        let code = i32::from(err.use_stderr());
        let _ = err.print();
        process::exit(code);
    })
}

/// Validate the project layout and synchronise the requested feature.
fn execute(cli: &Cli, config: &SyncConfig) -> Result<SyncReport> {
    if !config.features_dir.is_dir() {
        bail!(
            "features directory '{}' not found",
            config.features_dir.display()
        );
    }

    fs::create_dir_all(&config.steps_dir).wrap_err_with(|| {
        format!(
            "failed to create steps directory '{}'",
            config.steps_dir.display()
        )
    })?;

    let feature_path = config.features_dir.join(&cli.feature);
    if !feature_path.is_file() {
        bail!("feature file '{}' not found", cli.feature);
    }

    debug!(feature = %feature_path.display(), "synchronising feature");
    sync_feature(&feature_path, &config.steps_dir)
        .wrap_err_with(|| format!("failed to synchronise '{}'", cli.feature))
}

//! Structured logging for the command line tool.
//!
//! Logs are written to stderr so that stdout stays reserved for the sync
//! report, whether textual or JSON.

use tracing_subscriber::EnvFilter;

use stepsync::SyncConfig;

fn filter_from_config(config: &SyncConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level` (parsed into `config.log_level`)
/// 2. `STEPSYNC_LOG_LEVEL` (parsed into `config.log_level`)
/// 3. Default configuration value
///
/// # Note
///
/// If a global subscriber is already set, this function silently ignores
/// the error. This is expected behaviour in tests or when multiple
/// components attempt to initialise logging.
pub(crate) fn init_logging(config: &SyncConfig) {
    let filter = filter_from_config(config);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    // Ignore error if a subscriber is already set (e.g., in tests).
    // The first subscriber wins, which is the expected behaviour.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

//! Tool configuration parsed from environment variables.
//!
//! This module provides configuration types and parsing for the
//! synchroniser. All settings can be overridden via environment variables
//! prefixed with `STEPSYNC_`.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::SyncError;

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Info` when not specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, includes all trace spans.
    Trace,
    /// Debug-level information for development.
    Debug,
    /// Standard informational messages.
    #[default]
    Info,
    /// Warning messages for potentially problematic situations.
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(SyncError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Default features directory, relative to the working directory.
const DEFAULT_FEATURES_DIR: &str = "features";

/// Default step definitions directory, relative to the working directory.
const DEFAULT_STEPS_DIR: &str = "steps";

/// Configuration for a synchronisation run.
///
/// All settings can be overridden via environment variables prefixed with
/// `STEPSYNC_`.
///
/// # Environment Variables
///
/// - `STEPSYNC_FEATURES_DIR`: Directory containing feature files
/// - `STEPSYNC_STEPS_DIR`: Directory containing step definition files
/// - `STEPSYNC_LOG_LEVEL`: Sets the log level (trace, debug, info, warn,
///   error)
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Directory containing feature files.
    pub features_dir: PathBuf,
    /// Directory containing step definition files.
    pub steps_dir: PathBuf,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            features_dir: PathBuf::from(DEFAULT_FEATURES_DIR),
            steps_dir: PathBuf::from(DEFAULT_STEPS_DIR),
            log_level: LogLevel::default(),
        }
    }
}

impl SyncConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `STEPSYNC_FEATURES_DIR`, `STEPSYNC_STEPS_DIR`, and
    /// `STEPSYNC_LOG_LEVEL`. Falls back to defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::InvalidConfig` if `STEPSYNC_LOG_LEVEL` contains an
    /// unknown level.
    pub fn from_env() -> Result<Self, SyncError> {
        let features_dir = env::var_os("STEPSYNC_FEATURES_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_FEATURES_DIR), PathBuf::from);

        let steps_dir = env::var_os("STEPSYNC_STEPS_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_STEPS_DIR), PathBuf::from);

        let log_level = match env::var("STEPSYNC_LOG_LEVEL") {
            Ok(val) => val.parse()?,
            Err(_) => LogLevel::default(),
        };

        Ok(Self {
            features_dir,
            steps_dir,
            log_level,
        })
    }

    /// Apply optional overrides to an existing configuration.
    ///
    /// This is intended for CLI overrides that should take precedence over
    /// environment-based defaults.
    #[must_use]
    pub fn apply_overrides(
        mut self,
        features_dir: Option<PathBuf>,
        steps_dir: Option<PathBuf>,
        log_level: Option<LogLevel>,
    ) -> Self {
        if let Some(dir) = features_dir {
            self.features_dir = dir;
        }

        if let Some(dir) = steps_dir {
            self.steps_dir = dir;
        }

        if let Some(level) = log_level {
            self.log_level = level;
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_valid_values() {
        assert_eq!("trace".parse::<LogLevel>().ok(), Some(LogLevel::Trace));
        assert_eq!("debug".parse::<LogLevel>().ok(), Some(LogLevel::Debug));
        assert_eq!("info".parse::<LogLevel>().ok(), Some(LogLevel::Info));
        assert_eq!("warn".parse::<LogLevel>().ok(), Some(LogLevel::Warn));
        assert_eq!("warning".parse::<LogLevel>().ok(), Some(LogLevel::Warn));
        assert_eq!("error".parse::<LogLevel>().ok(), Some(LogLevel::Error));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        assert_eq!("TRACE".parse::<LogLevel>().ok(), Some(LogLevel::Trace));
        assert_eq!("Debug".parse::<LogLevel>().ok(), Some(LogLevel::Debug));
        assert_eq!("INFO".parse::<LogLevel>().ok(), Some(LogLevel::Info));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let result = "invalid".parse::<LogLevel>();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown log level"));
    }

    #[test]
    fn log_level_as_filter_str_returns_correct_strings() {
        assert_eq!(LogLevel::Trace.as_filter_str(), "trace");
        assert_eq!(LogLevel::Debug.as_filter_str(), "debug");
        assert_eq!(LogLevel::Info.as_filter_str(), "info");
        assert_eq!(LogLevel::Warn.as_filter_str(), "warn");
        assert_eq!(LogLevel::Error.as_filter_str(), "error");
    }

    #[test]
    fn sync_config_default_values() {
        let config = SyncConfig::default();
        assert_eq!(config.features_dir, PathBuf::from("features"));
        assert_eq!(config.steps_dir, PathBuf::from("steps"));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn sync_config_with_log_level_builder() {
        let config = SyncConfig::default().with_log_level(LogLevel::Debug);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn sync_config_apply_overrides_updates_selected_fields() {
        let config = SyncConfig::default().apply_overrides(
            Some(PathBuf::from("specs")),
            None,
            Some(LogLevel::Error),
        );
        assert_eq!(config.features_dir, PathBuf::from("specs"));
        assert_eq!(config.steps_dir, PathBuf::from("steps"));
        assert_eq!(config.log_level, LogLevel::Error);

        let config = SyncConfig::default().apply_overrides(None, None, None);
        assert_eq!(config.features_dir, PathBuf::from("features"));
        assert_eq!(config.steps_dir, PathBuf::from("steps"));
        assert_eq!(config.log_level, LogLevel::Info);
    }
}

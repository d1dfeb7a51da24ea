//! Error types for feature scanning and step reconciliation.
//!
//! Everything fallible in this crate reports a [`SyncError`], so callers can
//! match on one enum whether the failure came from the filesystem, the
//! feature grammar, or configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::keyword::StepKeyword;

/// Errors raised while scanning sources or synchronising step definitions.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An I/O error occurred while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A conjunction step appeared before any primary step resolved its type.
    #[error("conjunction '{keyword}' on line {line} has no preceding Given, When, or Then")]
    DanglingConjunction {
        /// Keyword as written in the feature source.
        keyword: StepKeyword,
        /// One-based line number of the offending step.
        line: usize,
    },

    /// The feature path has no file stem to derive a definition name from.
    #[error("feature path '{}' has no file stem", .0.display())]
    InvalidFeaturePath(PathBuf),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

//! Synchronises Gherkin feature files with cucumber-js step definitions.
//!
//! This crate keeps a project's `.feature` files and their TypeScript step
//! definition files in step: it extracts the steps a feature declares,
//! extracts the steps a definition file already implements, and appends a
//! typed stub for every declared step that has no implementation yet.
//!
//! # Overview
//!
//! Synchronisation runs in three stages:
//!
//! - [`feature::scan_feature_source`] walks `Scenario:` and `Background:`
//!   blocks, resolves `And`/`But` against the preceding step, and collapses
//!   quoted literals and `<placeholder>` tokens to `{string}` markers
//! - [`definition::scan_definition_source`] matches `Given(...)`,
//!   `When(...)`, and `Then(...)` registration calls in the definition file
//! - [`reconcile::reconcile`] diffs the two by step type and normalised
//!   description, then appends rendered stubs for missing steps
//!
//! Appending is idempotent: a generated stub is recognised by the next scan,
//! so running the tool twice never writes twice.
//!
//! # Configuration
//!
//! The tool can be configured via environment variables:
//!
//! - `STEPSYNC_FEATURES_DIR`: Directory containing feature files
//! - `STEPSYNC_STEPS_DIR`: Directory containing step definition files
//! - `STEPSYNC_LOG_LEVEL`: Log verbosity (trace, debug, info, warn, error)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use stepsync::sync_feature;
//!
//! # fn main() -> Result<(), stepsync::SyncError> {
//! let report = sync_feature(Path::new("features/login.feature"), Path::new("steps"))?;
//! if report.is_up_to_date() {
//!     println!("nothing to do");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod definition;
pub mod error;
pub mod feature;
pub mod keyword;
pub mod reconcile;
pub mod step;

pub use config::{LogLevel, SyncConfig};
pub use definition::{scan_definition_file, scan_definition_source};
pub use error::SyncError;
pub use feature::{PLACEHOLDER_MARKER, scan_feature_file, scan_feature_source};
pub use keyword::{StepKeyword, StepType};
pub use reconcile::{
    IMPORT_HEADER, SyncReport, definition_path, missing_steps, reconcile, sync_feature,
};
pub use step::{Step, StepKey, normalise_description};

//! Reconciliation of declared feature steps against implemented definitions.
//!
//! The reconciler owns the write side of the tool: it works out which
//! declared steps have no definition yet, renders a stub for each, and
//! appends the stubs to the feature's definition file. Existing file content
//! is never rewritten; a run either appends or leaves the file untouched.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::definition::scan_definition_file;
use crate::error::SyncError;
use crate::feature::scan_feature_file;
use crate::step::{Step, StepKey};

/// Import boilerplate written when a definition file is first created.
pub const IMPORT_HEADER: &str = "import { When, Then, Given } from \"@cucumber/cucumber\";\n\n";

/// Outcome of one synchronisation run.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Definition file that was inspected and possibly written.
    pub target: PathBuf,
    /// Whether this run created the definition file.
    pub created: bool,
    /// Steps whose stubs were appended, in declaration order.
    pub appended: Vec<Step>,
}

impl SyncReport {
    /// True when every declared step was already implemented.
    #[must_use]
    pub fn is_up_to_date(&self) -> bool {
        self.appended.is_empty()
    }
}

/// Resolve the definition file that corresponds to a feature file.
///
/// The definition lives directly inside `steps_dir`, named after the feature
/// file's stem with a `.ts` extension, so `features/login.feature` maps to
/// `steps/login.ts`.
///
/// # Errors
///
/// Returns [`SyncError::InvalidFeaturePath`] when `feature_path` has no file
/// stem to derive a name from.
pub fn definition_path(feature_path: &Path, steps_dir: &Path) -> Result<PathBuf, SyncError> {
    let stem = feature_path
        .file_stem()
        .ok_or_else(|| SyncError::InvalidFeaturePath(feature_path.to_path_buf()))?;
    let mut name = stem.to_os_string();
    name.push(".ts");
    Ok(steps_dir.join(name))
}

/// Declared steps with no implemented counterpart, in declaration order.
///
/// Steps are compared by [`Step::key`], so parameter lists never affect the
/// outcome. Declared steps sharing a key collapse to a single entry, which
/// keeps a step used by several scenarios from being stubbed twice.
#[must_use]
pub fn missing_steps(declared: &[Step], implemented: &[Step]) -> Vec<Step> {
    let mut seen: HashSet<StepKey> = implemented.iter().map(Step::key).collect();
    let mut missing = Vec::new();
    for step in declared {
        if seen.insert(step.key()) {
            missing.push(step.clone());
        }
    }
    missing
}

/// Render one stub definition for a missing step.
///
/// The stub re-quotes the normalised description in double quotes and always
/// annotates the handler's return type, so the next scan recognises the stub
/// and the run after an append changes nothing.
fn render_stub(step: &Step) -> String {
    format!(
        "{}(\"{}\", async ({}): Promise<void> => {{\n  // Implement your step here\n}});\n\n",
        step.ty, step.description, step.parameters
    )
}

/// Reconcile declared steps against the definition file at `target`.
///
/// Scans `target` when it exists, appends stubs for every declared step
/// without a definition, and creates the file with the import header when it
/// does not exist yet. When nothing is missing, the file is not opened for
/// writing at all.
///
/// # Errors
///
/// Returns [`SyncError::Io`] when the definition file cannot be read or
/// written.
pub fn reconcile(declared: &[Step], target: &Path) -> Result<SyncReport, SyncError> {
    let existed = target.exists();
    let implemented = if existed {
        scan_definition_file(target)?
    } else {
        Vec::new()
    };

    let missing = missing_steps(declared, &implemented);
    if missing.is_empty() {
        debug!(target = %target.display(), "definition file is up to date");
        return Ok(SyncReport {
            target: target.to_path_buf(),
            created: false,
            appended: Vec::new(),
        });
    }

    let mut rendered = String::new();
    if !existed {
        rendered.push_str(IMPORT_HEADER);
    }
    for step in &missing {
        rendered.push_str(&render_stub(step));
    }

    let mut file = OpenOptions::new().create(true).append(true).open(target)?;
    file.write_all(rendered.as_bytes())?;

    info!(
        target = %target.display(),
        appended = missing.len(),
        created = !existed,
        "appended step stubs"
    );

    Ok(SyncReport {
        target: target.to_path_buf(),
        created: !existed,
        appended: missing,
    })
}

/// Synchronise one feature file with its definition file.
///
/// Scans the feature, resolves the matching definition path inside
/// `steps_dir`, and reconciles the two.
///
/// # Errors
///
/// Propagates scanning errors from the feature file and read or write
/// failures on the definition file.
pub fn sync_feature(feature_path: &Path, steps_dir: &Path) -> Result<SyncReport, SyncError> {
    let declared = scan_feature_file(feature_path)?;
    let target = definition_path(feature_path, steps_dir)?;
    reconcile(&declared, &target)
}

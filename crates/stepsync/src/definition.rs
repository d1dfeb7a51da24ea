//! Step extraction from cucumber-js definition files.
//!
//! Definitions are TypeScript, but nothing here parses TypeScript: the
//! scanner matches registration calls (`Given(...)`, `When(...)`,
//! `Then(...)`) anywhere in the text, comments and strings included. That
//! keeps the scanner byte-oriented and predictable, and generated stubs are
//! always well-formed enough to match on the next run.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::SyncError;
use crate::step::{Step, normalise_description};

/// Pattern for a step registration call.
///
/// The description may use single or double quotes, lazily matched so that
/// several registrations on one line stay separate. The optional group
/// captures the parameter list of an arrow-function handler, with or without
/// the `async` marker. The trailing `:` anchors the match on the handler's
/// return-type annotation, which every generated stub carries.
static DEFINITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(Given|When|Then)\(["'](.+?)["'](?:, (?:async )?\(([^)]*?)\))?:"#)
        .unwrap_or_else(|_| unreachable!())
});

/// Read a definition file and extract its implemented steps.
///
/// # Errors
///
/// Returns [`SyncError::Io`] when the file cannot be read.
pub fn scan_definition_file(path: &Path) -> Result<Vec<Step>, SyncError> {
    let source = std::fs::read_to_string(path)?;
    let steps = scan_definition_source(&source);
    debug!(path = %path.display(), steps = steps.len(), "scanned definition file");
    Ok(steps)
}

/// Extract implemented steps from definition file text.
///
/// Matches are reported in source order. Descriptions are normalised the
/// same way feature steps are, so the two sides compare directly; parameter
/// lists are kept verbatim.
#[must_use]
pub fn scan_definition_source(source: &str) -> Vec<Step> {
    DEFINITION_RE
        .captures_iter(source)
        .filter_map(|caps| {
            let ty = caps.get(1)?.as_str().parse().ok()?;
            let description = normalise_description(caps.get(2)?.as_str());
            let parameters = caps
                .get(3)
                .map_or_else(String::new, |m| m.as_str().to_owned());
            Some(Step {
                ty,
                description,
                parameters,
            })
        })
        .collect()
}

//! Step extraction from Gherkin feature files.
//!
//! The recognised surface syntax is deliberately narrow: `Background:` and
//! `Scenario:` headers open a block, step lines start with `Given`, `When`,
//! `Then`, `And`, or `But`, and a blank line closes the block again. Step
//! lines outside a block are ignored, as is every other construct (tags,
//! `Feature:` headers, scenario outlines, doc strings, tables).
//!
//! Quoted literals (`"value"`) and angle-bracket placeholders (`<value>`) in
//! step text collapse to a literal `{string}` marker, so a declared step
//! compares equal to its implemented definition regardless of the concrete
//! values a scenario uses.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::SyncError;
use crate::keyword::{StepKeyword, StepType};
use crate::step::{Step, normalise_description};

/// Marker substituted for quoted literals and angle-bracket placeholders.
pub const PLACEHOLDER_MARKER: &str = "{string}";

static BACKGROUND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*Background:").unwrap_or_else(|_| unreachable!()));

static SCENARIO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*Scenario:").unwrap_or_else(|_| unreachable!()));

static STEP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(Given|When|Then|And|But)\s(.*)$").unwrap_or_else(|_| unreachable!())
});

static QUOTED_OR_ANGLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"]+"|<[^>]+>"#).unwrap_or_else(|_| unreachable!()));

/// Scanner position relative to a `Background:` or `Scenario:` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    /// Not inside a block; step lines are ignored.
    Outside,
    /// Inside a block; step lines produce [`Step`] records.
    InBlock,
}

/// Read a feature file and extract its declared steps.
///
/// # Errors
///
/// Returns [`SyncError::Io`] when the file cannot be read and
/// [`SyncError::DanglingConjunction`] when a block opens with `And` or `But`.
pub fn scan_feature_file(path: &Path) -> Result<Vec<Step>, SyncError> {
    let source = std::fs::read_to_string(path)?;
    let steps = scan_feature_source(&source)?;
    debug!(path = %path.display(), steps = steps.len(), "scanned feature file");
    Ok(steps)
}

/// Extract declared steps from feature file text.
///
/// Lines are split with [`str::lines`], so `\r\n` endings behave like plain
/// `\n`. Only blank lines reset the scanner: two block headers without an
/// intervening blank line leave the previously resolved step type in effect.
///
/// # Errors
///
/// Returns [`SyncError::DanglingConjunction`] when an `And` or `But` step
/// appears before any `Given`, `When`, or `Then` resolved a type.
pub fn scan_feature_source(source: &str) -> Result<Vec<Step>, SyncError> {
    let mut steps = Vec::new();
    let mut state = BlockState::Outside;
    let mut last: Option<StepType> = None;

    for (idx, line) in source.lines().enumerate() {
        if SCENARIO_RE.is_match(line) || BACKGROUND_RE.is_match(line) {
            state = BlockState::InBlock;
            continue;
        }
        if state == BlockState::InBlock
            && let Some(caps) = STEP_RE.captures(line)
        {
            let Some(keyword) = parse_keyword(&caps) else {
                continue;
            };
            let Some(ty) = keyword.resolve(last) else {
                return Err(SyncError::DanglingConjunction {
                    keyword,
                    line: idx.saturating_add(1),
                });
            };
            let text = caps.get(2).map_or("", |m| m.as_str());
            let substituted = QUOTED_OR_ANGLE_RE.replace_all(text, PLACEHOLDER_MARKER);
            steps.push(Step {
                ty,
                description: normalise_description(&substituted),
                parameters: String::new(),
            });
            last = Some(ty);
            continue;
        }
        if line.trim().is_empty() {
            state = BlockState::Outside;
            last = None;
        }
    }

    Ok(steps)
}

/// Parse the keyword capture of a matched step line.
///
/// The alternation in `STEP_RE` only admits the five keyword spellings, so
/// this cannot return `None` in practice.
fn parse_keyword(caps: &regex::Captures<'_>) -> Option<StepKeyword> {
    caps.get(1).and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests;

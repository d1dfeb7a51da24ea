//! Normalised step records shared by the feature and definition scanners.

use serde::Serialize;

use crate::keyword::StepType;

/// Identity of a step: its resolved type plus its normalised description.
///
/// Parameters are deliberately excluded so a declared step matches an
/// implemented one regardless of the parameter list the author chose.
pub type StepKey = (StepType, String);

/// One step, normalised so both scanners produce comparable records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Resolved step type.
    #[serde(rename = "type")]
    pub ty: StepType,
    /// Description text after placeholder substitution and normalisation.
    pub description: String,
    /// Verbatim parameter-list text from a definition, or empty for steps
    /// scanned from a feature file.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parameters: String,
}

impl Step {
    /// Key used to compare declared steps against implemented ones.
    #[must_use]
    pub fn key(&self) -> StepKey {
        (self.ty, self.description.clone())
    }
}

/// Trim surrounding whitespace and rewrite double quotes as single quotes.
///
/// Generated stubs wrap descriptions in double quotes, so any double quote
/// kept inside the text would corrupt the stub. Both scanners apply this, so
/// the two sides stay comparable.
#[must_use]
pub fn normalise_description(raw: &str) -> String {
    raw.trim().replace('"', "'")
}

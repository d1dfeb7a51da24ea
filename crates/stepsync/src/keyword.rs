//! Step keywords and their resolution into step types.
//!
//! Feature files write steps with five keywords; step definitions register
//! them under three. [`StepKeyword`] models the surface spelling while
//! [`StepType`] models the resolved category, with `And` and `But` borrowing
//! the type of the step before them.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Resolved category of a step.
///
/// This is the vocabulary step definitions use: conjunction keywords never
/// reach this type because [`StepKeyword::resolve`] rewrites them first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StepType {
    /// A precondition step.
    Given,
    /// An action step.
    When,
    /// An assertion step.
    Then,
}

impl StepType {
    /// Canonical spelling used in generated definitions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
        }
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepType {
    type Err = StepKeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim();
        if normalised.eq_ignore_ascii_case("given") {
            Ok(Self::Given)
        } else if normalised.eq_ignore_ascii_case("when") {
            Ok(Self::When)
        } else if normalised.eq_ignore_ascii_case("then") {
            Ok(Self::Then)
        } else {
            Err(StepKeywordParseError(s.to_string()))
        }
    }
}

/// Keyword as written at the start of a feature step line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKeyword {
    /// Introduces a precondition.
    Given,
    /// Introduces an action.
    When,
    /// Introduces an assertion.
    Then,
    /// Continues the preceding step's type.
    And,
    /// Continues the preceding step's type, usually negated.
    But,
}

impl StepKeyword {
    /// Canonical spelling of the keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
        }
    }

    /// Resolve the keyword against the previously resolved step type.
    ///
    /// Primary keywords resolve to their own type regardless of `prev`.
    /// `And` and `But` take on `prev`, and resolve to `None` when no primary
    /// step has been seen in the current block.
    #[must_use]
    pub fn resolve(self, prev: Option<StepType>) -> Option<StepType> {
        match self {
            Self::Given => Some(StepType::Given),
            Self::When => Some(StepType::When),
            Self::Then => Some(StepType::Then),
            Self::And | Self::But => prev,
        }
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepKeyword {
    type Err = StepKeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim();
        if normalised.eq_ignore_ascii_case("given") {
            Ok(Self::Given)
        } else if normalised.eq_ignore_ascii_case("when") {
            Ok(Self::When)
        } else if normalised.eq_ignore_ascii_case("then") {
            Ok(Self::Then)
        } else if normalised.eq_ignore_ascii_case("and") {
            Ok(Self::And)
        } else if normalised.eq_ignore_ascii_case("but") {
            Ok(Self::But)
        } else {
            Err(StepKeywordParseError(s.to_string()))
        }
    }
}

/// Error returned when text does not name a known keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepKeywordParseError(pub String);

impl fmt::Display for StepKeywordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised step keyword: {}", self.0)
    }
}

impl std::error::Error for StepKeywordParseError {}

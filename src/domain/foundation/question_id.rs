//! QuestionId value object - compact scale-prefixed item identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Scale, ValidationError};

/// Identifier for a questionnaire item, e.g. `p3` or `g7`.
///
/// The leading character carries the scale membership (`p` mood, `g`
/// anxiety) and the remainder is the item's position within its
/// instrument. Validated on construction; deserialization re-validates.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a QuestionId, returning error if the id is not a scale
    /// prefix followed by digits.
    pub fn try_new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let mut chars = id.chars();
        let prefix = chars
            .next()
            .ok_or_else(|| ValidationError::empty_field("question_id"))?;

        if Scale::from_prefix(prefix).is_none() {
            return Err(ValidationError::invalid_format(
                "question_id",
                format!("'{}' does not start with a scale prefix", id),
            ));
        }

        let rest: String = chars.collect();
        if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "question_id",
                format!("'{}' is not a prefix followed by digits", id),
            ));
        }

        Ok(Self(id))
    }

    /// The designated suicidal-ideation item: the mood scale's final
    /// question.
    pub fn ideation() -> Self {
        Self("p9".to_string())
    }

    /// Returns the scale this item belongs to, derived from the prefix.
    pub fn scale(&self) -> Scale {
        // The constructor guarantees the first character is a scale prefix.
        if self.0.starts_with(Scale::Anxiety.prefix()) {
            Scale::Anxiety
        } else {
            Scale::Mood
        }
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for QuestionId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

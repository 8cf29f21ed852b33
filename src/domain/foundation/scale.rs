//! Scale enum for the two clinical screening instruments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two screening instruments the assessment administers.
///
/// Question ids carry the scale prefix: `p*` items feed the mood scale
/// (PHQ-9) and `g*` items feed the anxiety scale (GAD-7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    Mood,
    Anxiety,
}

impl Scale {
    /// Returns both scales in canonical order (mood items come first in
    /// the questionnaire walk).
    pub fn all() -> &'static [Scale] {
        &[Scale::Mood, Scale::Anxiety]
    }

    /// Returns the question-id prefix that marks membership in this scale.
    pub fn prefix(&self) -> char {
        match self {
            Scale::Mood => 'p',
            Scale::Anxiety => 'g',
        }
    }

    /// Returns the scale whose prefix starts the given question id, if any.
    pub fn from_prefix(prefix: char) -> Option<Scale> {
        match prefix {
            'p' => Some(Scale::Mood),
            'g' => Some(Scale::Anxiety),
            _ => None,
        }
    }

    /// Returns the published name of the underlying instrument.
    pub fn instrument_name(&self) -> &'static str {
        match self {
            Scale::Mood => "PHQ-9",
            Scale::Anxiety => "GAD-7",
        }
    }

    /// Returns the display name used in results.
    pub fn display_name(&self) -> &'static str {
        match self {
            Scale::Mood => "Mood",
            Scale::Anxiety => "Anxiety",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

//! Severity enum for clinical severity bands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Clinical severity band for a scale score.
///
/// The total order (`Minimal < Mild < Moderate < ModeratelySevere < Severe`)
/// is used only for threshold comparison, never for arithmetic. The anxiety
/// scale never produces `ModeratelySevere`; its band set has four members,
/// one fewer than the mood scale.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    #[default]
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl Severity {
    /// Returns all bands in ascending clinical order.
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Minimal,
            Severity::Mild,
            Severity::Moderate,
            Severity::ModeratelySevere,
            Severity::Severe,
        ]
    }

    /// Returns the kebab-case band name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minimal => "minimal",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::ModeratelySevere => "moderately-severe",
            Severity::Severe => "severe",
        }
    }

    /// Returns true if this band is at or above the given band.
    pub fn is_at_least(&self, other: Severity) -> bool {
        *self >= other
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

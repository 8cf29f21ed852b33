//! Safety flags - crisis-level risk derived from scale results.

use serde::{Deserialize, Serialize};

use super::{AnswerSet, ScaleResult};
use crate::domain::foundation::{QuestionId, Scale, Severity};

/// Crisis indicators derived from an answer set and its scale results.
/// Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyFlags {
    /// The designated ideation item (the mood scale's final question)
    /// was answered with anything above zero.
    pub suicidal_ideation: bool,

    /// Either scale at severe, or the mood scale at moderately-severe.
    /// The anxiety scale's moderate band never raises this flag.
    pub severe_symptoms: bool,
}

impl SafetyFlags {
    /// Derives the flags from a consistent snapshot of answers and the
    /// two scale results computed from that same snapshot.
    pub fn derive(answers: &AnswerSet, mood: &ScaleResult, anxiety: &ScaleResult) -> Self {
        debug_assert_eq!(mood.scale, Scale::Mood);
        debug_assert_eq!(anxiety.scale, Scale::Anxiety);

        let suicidal_ideation = answers
            .get(&QuestionId::ideation())
            .map(|value| value.is_endorsed())
            .unwrap_or(false);

        let severe_symptoms = anxiety.severity == Severity::Severe
            || mood.severity == Severity::Severe
            || mood.severity == Severity::ModeratelySevere;

        Self {
            suicidal_ideation,
            severe_symptoms,
        }
    }

    /// Returns true if either flag is raised (crisis banner treatment).
    pub fn any(&self) -> bool {
        self.suicidal_ideation || self.severe_symptoms
    }
}

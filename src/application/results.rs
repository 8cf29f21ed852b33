//! ResultsSummary - assembles everything the results screen needs.

use serde::{Deserialize, Serialize};

use crate::domain::narrative::advocacy_script;
use crate::domain::scoring::{SafetyFlags, ScaleResult, ScoringEngine};
use crate::domain::session::AssessmentSession;

/// Everything derived from one consistent session snapshot: both scale
/// results, the safety flags, the minimality flag, and the advocacy
/// script. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsSummary {
    pub mood: ScaleResult,
    pub anxiety: ScaleResult,
    pub safety: SafetyFlags,
    pub minimal: bool,
    pub script: String,
}

impl ResultsSummary {
    /// Derives the summary from a session snapshot.
    ///
    /// Valid at any point in the walk: a partial answer set yields a
    /// provisional summary over whatever has been answered so far.
    pub fn from_session(session: &AssessmentSession) -> Self {
        let language = session.language();
        let answers = session.answers();

        let mood = ScoringEngine::mood_scale(answers, language);
        let anxiety = ScoringEngine::anxiety_scale(answers, language);
        let safety = SafetyFlags::derive(answers, &mood, &anxiety);
        let minimal = ScoringEngine::is_minimal(&mood, &anxiety);
        let script = advocacy_script(&mood, &anxiety, language);

        if safety.any() {
            tracing::warn!(
                session = %session.id(),
                suicidal_ideation = safety.suicidal_ideation,
                severe_symptoms = safety.severe_symptoms,
                "crisis flags raised"
            );
        } else {
            tracing::debug!(
                session = %session.id(),
                mood_score = mood.score,
                anxiety_score = anxiety.score,
                "results derived"
            );
        }

        Self {
            mood,
            anxiety,
            safety,
            minimal,
            script,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::question_count;
    use crate::domain::foundation::{AnswerValue, Language, Severity};

    fn session_with_uniform_answers(value: u8) -> AssessmentSession {
        let mut session = AssessmentSession::new(Language::En);
        session.start().unwrap();
        for _ in 0..question_count() {
            session
                .answer_current(AnswerValue::try_from_u8(value).unwrap())
                .unwrap();
        }
        session
    }

    #[test]
    fn fresh_session_yields_minimal_summary() {
        let mut session = AssessmentSession::new(Language::En);
        session.start().unwrap();

        let summary = ResultsSummary::from_session(&session);
        assert_eq!(summary.mood.score, 0);
        assert_eq!(summary.anxiety.score, 0);
        assert!(summary.minimal);
        assert!(!summary.safety.any());
    }

    #[test]
    fn uniform_threes_raise_both_flags() {
        // Mood 27 (severe), anxiety 21 (severe), ideation endorsed.
        let session = session_with_uniform_answers(3);
        let summary = ResultsSummary::from_session(&session);

        assert_eq!(summary.mood.severity, Severity::Severe);
        assert_eq!(summary.anxiety.severity, Severity::Severe);
        assert!(summary.safety.suicidal_ideation);
        assert!(summary.safety.severe_symptoms);
        assert!(!summary.minimal);
    }

    #[test]
    fn summary_is_deterministic_for_a_snapshot() {
        let session = session_with_uniform_answers(2);
        let first = ResultsSummary::from_session(&session);
        let second = ResultsSummary::from_session(&session);
        assert_eq!(first, second);
    }

    #[test]
    fn provisional_summary_mid_assessment() {
        let mut session = AssessmentSession::new(Language::En);
        session.start().unwrap();
        session
            .answer_current(AnswerValue::try_from_u8(3).unwrap())
            .unwrap();

        let summary = ResultsSummary::from_session(&session);
        assert_eq!(summary.mood.score, 3);
        assert_eq!(summary.mood.severity, Severity::Minimal);
    }

    #[test]
    fn script_follows_session_language() {
        let mut session = session_with_uniform_answers(1);
        let en = ResultsSummary::from_session(&session);
        assert!(en.script.contains("wellness screening"));

        session.toggle_language();
        let es = ResultsSummary::from_session(&session);
        assert!(es.script.contains("chequeo de bienestar"));
    }
}

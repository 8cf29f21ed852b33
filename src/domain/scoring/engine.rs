//! Scoring engine - pure reduction of an answer set into scale results.

use serde::{Deserialize, Serialize};

use super::AnswerSet;
use crate::domain::foundation::{Language, Scale, Severity};
use crate::domain::interpretation;

/// Both scores below this threshold count as a minimal presentation.
pub const MINIMAL_SCORE_THRESHOLD: u16 = 5;

/// Derived clinical result for one scale. Never mutated, always
/// recomputed from an answer set snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleResult {
    pub scale: Scale,
    pub score: u16,
    pub severity: Severity,
    pub label: String,
    pub recommendation: String,
    pub clinical_translation: String,
}

/// Calculator for scale scores and severity bands.
///
/// All functions are pure and total: any answer set, including an empty
/// or partial one, produces a result. A partial set yields a provisional
/// score over whatever subset has been answered.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Scores the mood scale (PHQ-9) for the given locale.
    pub fn mood_scale(answers: &AnswerSet, language: Language) -> ScaleResult {
        Self::scale_result(Scale::Mood, answers, language)
    }

    /// Scores the anxiety scale (GAD-7) for the given locale.
    pub fn anxiety_scale(answers: &AnswerSet, language: Language) -> ScaleResult {
        Self::scale_result(Scale::Anxiety, answers, language)
    }

    /// Assigns the severity band for a score. Severity is a pure function
    /// of score alone; each scale's bands partition `[0, ∞)` with no gaps
    /// or overlaps.
    ///
    /// The anxiety instrument has no moderately-severe band: four bands,
    /// one fewer than mood. The asymmetry is clinical, not accidental.
    pub fn severity_for(scale: Scale, score: u16) -> Severity {
        match scale {
            Scale::Mood => match score {
                0..=4 => Severity::Minimal,
                5..=9 => Severity::Mild,
                10..=14 => Severity::Moderate,
                15..=19 => Severity::ModeratelySevere,
                _ => Severity::Severe,
            },
            Scale::Anxiety => match score {
                0..=4 => Severity::Minimal,
                5..=9 => Severity::Mild,
                10..=14 => Severity::Moderate,
                _ => Severity::Severe,
            },
        }
    }

    /// Returns true if both presentations are minimal (both scores
    /// below the minimal threshold). Drives the minimal advocacy script.
    pub fn is_minimal(mood: &ScaleResult, anxiety: &ScaleResult) -> bool {
        mood.score < MINIMAL_SCORE_THRESHOLD && anxiety.score < MINIMAL_SCORE_THRESHOLD
    }

    fn scale_result(scale: Scale, answers: &AnswerSet, language: Language) -> ScaleResult {
        let score = answers.scale_score(scale);
        let severity = Self::severity_for(scale, score);
        let entry = interpretation::lookup(scale, severity, language)
            .expect("band partition only produces severities with interpretation entries");

        ScaleResult {
            scale,
            score,
            severity,
            label: interpretation::severity_label(severity, language).to_string(),
            recommendation: entry.recommendation.to_string(),
            clinical_translation: entry.clinical_translation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AnswerValue, QuestionId};

    fn answers_from(pairs: &[(&str, u8)]) -> AnswerSet {
        let mut answers = AnswerSet::new();
        for (id, value) in pairs {
            answers.record(
                QuestionId::try_new(*id).unwrap(),
                AnswerValue::try_from_u8(*value).unwrap(),
            );
        }
        answers
    }

    #[test]
    fn empty_answer_set_scores_zero_minimal_both_scales() {
        let answers = AnswerSet::new();
        let mood = ScoringEngine::mood_scale(&answers, Language::En);
        let anxiety = ScoringEngine::anxiety_scale(&answers, Language::En);

        assert_eq!(mood.score, 0);
        assert_eq!(mood.severity, Severity::Minimal);
        assert_eq!(anxiety.score, 0);
        assert_eq!(anxiety.severity, Severity::Minimal);
    }

    #[test]
    fn mood_bands_partition_scores() {
        let cases = [
            (0, Severity::Minimal),
            (4, Severity::Minimal),
            (5, Severity::Mild),
            (9, Severity::Mild),
            (10, Severity::Moderate),
            (14, Severity::Moderate),
            (15, Severity::ModeratelySevere),
            (19, Severity::ModeratelySevere),
            (20, Severity::Severe),
            (27, Severity::Severe),
        ];
        for (score, expected) in cases {
            assert_eq!(
                ScoringEngine::severity_for(Scale::Mood, score),
                expected,
                "mood score {}",
                score
            );
        }
    }

    #[test]
    fn anxiety_bands_partition_scores() {
        let cases = [
            (0, Severity::Minimal),
            (4, Severity::Minimal),
            (5, Severity::Mild),
            (9, Severity::Mild),
            (10, Severity::Moderate),
            (14, Severity::Moderate),
            (15, Severity::Severe),
            (21, Severity::Severe),
        ];
        for (score, expected) in cases {
            assert_eq!(
                ScoringEngine::severity_for(Scale::Anxiety, score),
                expected,
                "anxiety score {}",
                score
            );
        }
    }

    #[test]
    fn anxiety_never_produces_moderately_severe() {
        // Pins the four-band anxiety scheme for every score; a fifth band
        // must never appear.
        for score in 0..=100u16 {
            assert_ne!(
                ScoringEngine::severity_for(Scale::Anxiety, score),
                Severity::ModeratelySevere,
                "anxiety score {}",
                score
            );
        }
    }

    #[test]
    fn anxiety_twelve_is_moderate_not_moderately_severe() {
        let answers = answers_from(&[("g1", 3), ("g2", 3), ("g3", 3), ("g4", 3)]);
        let result = ScoringEngine::anxiety_scale(&answers, Language::En);
        assert_eq!(result.score, 12);
        assert_eq!(result.severity, Severity::Moderate);
    }

    #[test]
    fn mood_four_is_minimal_with_localized_entry() {
        let answers = answers_from(&[("p1", 1), ("p2", 1), ("p3", 1), ("p4", 1)]);

        let en = ScoringEngine::mood_scale(&answers, Language::En);
        assert_eq!(en.score, 4);
        assert_eq!(en.severity, Severity::Minimal);
        assert_eq!(en.label, "Minimal");

        let es = ScoringEngine::mood_scale(&answers, Language::Es);
        assert_eq!(es.severity, Severity::Minimal);
        assert_eq!(es.label, "Mínimo");
        assert_ne!(en.recommendation, es.recommendation);
    }

    #[test]
    fn mood_twenty_is_severe() {
        let answers = answers_from(&[
            ("p1", 3),
            ("p2", 3),
            ("p3", 3),
            ("p4", 3),
            ("p5", 3),
            ("p6", 3),
            ("p7", 2),
        ]);
        let result = ScoringEngine::mood_scale(&answers, Language::En);
        assert_eq!(result.score, 20);
        assert_eq!(result.severity, Severity::Severe);
    }

    #[test]
    fn score_ignores_other_scale_entries() {
        let answers = answers_from(&[("p1", 3), ("g1", 3), ("g2", 3)]);
        let mood = ScoringEngine::mood_scale(&answers, Language::En);
        assert_eq!(mood.score, 3);
    }

    #[test]
    fn scoring_is_idempotent() {
        let answers = answers_from(&[("p1", 2), ("p5", 1), ("g3", 3)]);
        let first = ScoringEngine::mood_scale(&answers, Language::Es);
        let second = ScoringEngine::mood_scale(&answers, Language::Es);
        assert_eq!(first, second);
    }

    #[test]
    fn is_minimal_requires_both_scores_below_five() {
        let low = answers_from(&[("p1", 2), ("p2", 1), ("g1", 2)]);
        let mood = ScoringEngine::mood_scale(&low, Language::En);
        let anxiety = ScoringEngine::anxiety_scale(&low, Language::En);
        assert_eq!((mood.score, anxiety.score), (3, 2));
        assert!(ScoringEngine::is_minimal(&mood, &anxiety));

        let mixed = answers_from(&[("p1", 3), ("p2", 2), ("g1", 1)]);
        let mood = ScoringEngine::mood_scale(&mixed, Language::En);
        let anxiety = ScoringEngine::anxiety_scale(&mixed, Language::En);
        assert!(!ScoringEngine::is_minimal(&mood, &anxiety));
    }

    #[test]
    fn result_carries_interpretation_texts() {
        let answers = answers_from(&[("g1", 3), ("g2", 3), ("g3", 3), ("g4", 3), ("g5", 3)]);
        let result = ScoringEngine::anxiety_scale(&answers, Language::En);
        assert_eq!(result.severity, Severity::Severe);
        assert!(!result.recommendation.is_empty());
        assert!(!result.clinical_translation.is_empty());
        assert_eq!(result.label, "Severe");
    }
}

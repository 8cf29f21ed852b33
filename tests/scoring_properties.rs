//! Property tests for the scoring engine.
//!
//! Pins the invariants: score is the sum of a scale's answered values,
//! severity is a pure function of score with bands partitioning the
//! non-negative integers, scoring is idempotent, and the safety flags
//! follow their exact truth tables.

use proptest::collection::btree_map;
use proptest::prelude::*;

use vibe_check::domain::foundation::{AnswerValue, Language, QuestionId, Scale, Severity};
use vibe_check::domain::interpretation;
use vibe_check::domain::scoring::{AnswerSet, SafetyFlags, ScoringEngine};

const ALL_IDS: &[&str] = &[
    "p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8", "p9", "g1", "g2", "g3", "g4", "g5", "g6",
    "g7",
];

fn arb_answer_map() -> impl Strategy<Value = AnswerSet> {
    btree_map(0usize..ALL_IDS.len(), 0u8..=3, 0..=ALL_IDS.len()).prop_map(|map| {
        let mut answers = AnswerSet::new();
        for (index, value) in map {
            answers.record(
                QuestionId::try_new(ALL_IDS[index]).unwrap(),
                AnswerValue::try_from_u8(value).unwrap(),
            );
        }
        answers
    })
}

fn arb_language() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::En), Just(Language::Es)]
}

/// The band a mood score falls into, written as the interval partition
/// rather than the first-match threshold chain.
fn mood_band_by_interval(score: u16) -> Severity {
    if score < 5 {
        Severity::Minimal
    } else if score < 10 {
        Severity::Mild
    } else if score < 15 {
        Severity::Moderate
    } else if score < 20 {
        Severity::ModeratelySevere
    } else {
        Severity::Severe
    }
}

fn anxiety_band_by_interval(score: u16) -> Severity {
    if score < 5 {
        Severity::Minimal
    } else if score < 10 {
        Severity::Mild
    } else if score < 15 {
        Severity::Moderate
    } else {
        Severity::Severe
    }
}

proptest! {
    #[test]
    fn score_is_sum_of_scale_values(answers in arb_answer_map(), language in arb_language()) {
        for scale in [Scale::Mood, Scale::Anxiety] {
            let expected: u16 = answers
                .iter()
                .filter(|(id, _)| id.scale() == scale)
                .map(|(_, value)| u16::from(value.value()))
                .sum();

            let result = match scale {
                Scale::Mood => ScoringEngine::mood_scale(&answers, language),
                Scale::Anxiety => ScoringEngine::anxiety_scale(&answers, language),
            };
            prop_assert_eq!(result.score, expected);
        }
    }

    #[test]
    fn severity_matches_interval_partition(score in 0u16..=200) {
        prop_assert_eq!(
            ScoringEngine::severity_for(Scale::Mood, score),
            mood_band_by_interval(score)
        );
        prop_assert_eq!(
            ScoringEngine::severity_for(Scale::Anxiety, score),
            anxiety_band_by_interval(score)
        );
    }

    #[test]
    fn severity_is_monotone_in_score(score in 0u16..=199) {
        for scale in [Scale::Mood, Scale::Anxiety] {
            let here = ScoringEngine::severity_for(scale, score);
            let next = ScoringEngine::severity_for(scale, score + 1);
            prop_assert!(here <= next);
        }
    }

    #[test]
    fn anxiety_never_yields_moderately_severe(score in 0u16..=200) {
        prop_assert_ne!(
            ScoringEngine::severity_for(Scale::Anxiety, score),
            Severity::ModeratelySevere
        );
    }

    #[test]
    fn scoring_is_idempotent(answers in arb_answer_map(), language in arb_language()) {
        let mood_a = ScoringEngine::mood_scale(&answers, language);
        let mood_b = ScoringEngine::mood_scale(&answers, language);
        prop_assert_eq!(mood_a, mood_b);

        let anxiety_a = ScoringEngine::anxiety_scale(&answers, language);
        let anxiety_b = ScoringEngine::anxiety_scale(&answers, language);
        prop_assert_eq!(anxiety_a, anxiety_b);
    }

    #[test]
    fn ideation_flag_tracks_the_designated_item(answers in arb_answer_map()) {
        let mood = ScoringEngine::mood_scale(&answers, Language::En);
        let anxiety = ScoringEngine::anxiety_scale(&answers, Language::En);
        let flags = SafetyFlags::derive(&answers, &mood, &anxiety);

        let expected = answers
            .get(&QuestionId::ideation())
            .map(|value| value.value() > 0)
            .unwrap_or(false);
        prop_assert_eq!(flags.suicidal_ideation, expected);
    }

    #[test]
    fn severe_symptoms_follows_the_truth_table(answers in arb_answer_map()) {
        let mood = ScoringEngine::mood_scale(&answers, Language::En);
        let anxiety = ScoringEngine::anxiety_scale(&answers, Language::En);
        let flags = SafetyFlags::derive(&answers, &mood, &anxiety);

        let expected = anxiety.severity == Severity::Severe
            || mood.severity == Severity::Severe
            || mood.severity == Severity::ModeratelySevere;
        prop_assert_eq!(flags.severe_symptoms, expected);
    }

    #[test]
    fn every_result_carries_nonempty_interpretation(
        answers in arb_answer_map(),
        language in arb_language(),
    ) {
        for result in [
            ScoringEngine::mood_scale(&answers, language),
            ScoringEngine::anxiety_scale(&answers, language),
        ] {
            prop_assert!(!result.label.is_empty());
            prop_assert!(!result.recommendation.is_empty());
            prop_assert!(!result.clinical_translation.is_empty());
        }
    }
}

#[test]
fn every_reachable_band_has_a_table_entry() {
    for scale in Scale::all() {
        for severity in interpretation::reachable_severities(*scale) {
            for language in Language::all() {
                let entry = interpretation::lookup(*scale, *severity, *language).unwrap();
                assert!(!entry.recommendation.is_empty());
                assert!(!entry.clinical_translation.is_empty());
                assert!(!interpretation::severity_label(*severity, *language).is_empty());
            }
        }
    }
}

//! Interpretation table - static severity x scale x language lookup.
//!
//! A read-only resource supplied to the scoring engine. Wording is opaque
//! content; what matters is that every combination the engine can produce
//! has a non-empty entry, which [`validate_completeness`] checks as a
//! startup invariant. The anxiety scale has no moderately-severe band, so
//! that combination is deliberately absent and its lookup fails.

use once_cell::sync::Lazy;

use crate::domain::foundation::{DomainError, ErrorCode, Language, Scale, Severity};

/// Recommendation text plus its clinical translation for one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation {
    pub recommendation: &'static str,
    pub clinical_translation: &'static str,
}

type Key = (Scale, Severity, Language);

static ENTRIES: Lazy<Vec<(Key, Interpretation)>> = Lazy::new(|| {
    use Language::{En, Es};
    use Scale::{Anxiety, Mood};
    use Severity::{Mild, Minimal, Moderate, ModeratelySevere, Severe};

    vec![
        // Mood (PHQ-9) - five bands.
        (
            (Mood, Minimal, En),
            Interpretation {
                recommendation: "You're holding steady. Keep doing what works — movement, your people, real sleep — and check in again whenever you need to.",
                clinical_translation: "Score consistent with minimal depressive symptoms; routine wellness support is appropriate.",
            },
        ),
        (
            (Mood, Minimal, Es),
            Interpretation {
                recommendation: "Vas bien. Sigue con lo que te funciona — moverte, tu gente, dormir de verdad — y vuelve a chequearte cuando lo necesites.",
                clinical_translation: "Puntuación consistente con síntomas depresivos mínimos; el apoyo de bienestar de rutina es apropiado.",
            },
        ),
        (
            (Mood, Mild, En),
            Interpretation {
                recommendation: "Something's weighing on you a little. Small daily resets help, and talking to someone you trust counts.",
                clinical_translation: "Score suggests mild depressive symptoms; watchful waiting with a recheck in a few weeks is reasonable.",
            },
        ),
        (
            (Mood, Mild, Es),
            Interpretation {
                recommendation: "Algo te está pesando un poco. Los pequeños descansos diarios ayudan, y hablar con alguien de confianza cuenta.",
                clinical_translation: "La puntuación sugiere síntomas depresivos leves; es razonable observar y repetir el chequeo en unas semanas.",
            },
        ),
        (
            (Mood, Moderate, En),
            Interpretation {
                recommendation: "This is more than a rough week. A conversation with a doctor or counselor is a solid next move.",
                clinical_translation: "Score suggests moderate depressive symptoms; clinical evaluation and a treatment plan are recommended.",
            },
        ),
        (
            (Mood, Moderate, Es),
            Interpretation {
                recommendation: "Esto es más que una semana difícil. Hablar con un doctor o consejero es un buen siguiente paso.",
                clinical_translation: "La puntuación sugiere síntomas depresivos moderados; se recomienda evaluación clínica y un plan de tratamiento.",
            },
        ),
        (
            (Mood, ModeratelySevere, En),
            Interpretation {
                recommendation: "You're carrying a lot right now. Please connect with a clinician soon — support changes this.",
                clinical_translation: "Score suggests moderately severe depressive symptoms; active treatment with a clinician is indicated.",
            },
        ),
        (
            (Mood, ModeratelySevere, Es),
            Interpretation {
                recommendation: "Estás cargando mucho ahora mismo. Por favor conecta pronto con un profesional — el apoyo cambia esto.",
                clinical_translation: "La puntuación sugiere síntomas depresivos moderadamente severos; está indicado tratamiento activo con un profesional.",
            },
        ),
        (
            (Mood, Severe, En),
            Interpretation {
                recommendation: "This is heavy, and you shouldn't carry it alone. Reach out to a clinician now — today if you can.",
                clinical_translation: "Score suggests severe depressive symptoms; prompt initiation of treatment is strongly indicated.",
            },
        ),
        (
            (Mood, Severe, Es),
            Interpretation {
                recommendation: "Esto pesa mucho, y no deberías cargarlo solo. Contacta a un profesional ahora — hoy si puedes.",
                clinical_translation: "La puntuación sugiere síntomas depresivos severos; está fuertemente indicado iniciar tratamiento pronto.",
            },
        ),
        // Anxiety (GAD-7) - four bands, no moderately-severe.
        (
            (Anxiety, Minimal, En),
            Interpretation {
                recommendation: "Your worry level looks manageable right now. Keep your resets close for the loud days.",
                clinical_translation: "Score consistent with minimal anxiety symptoms; no intervention indicated.",
            },
        ),
        (
            (Anxiety, Minimal, Es),
            Interpretation {
                recommendation: "Tu nivel de preocupación se ve manejable por ahora. Ten tus descansos a la mano para los días pesados.",
                clinical_translation: "Puntuación consistente con síntomas de ansiedad mínimos; no se indica intervención.",
            },
        ),
        (
            (Anxiety, Mild, En),
            Interpretation {
                recommendation: "Your nerves are working overtime a bit. Breathing and grounding breaks make a good daily habit.",
                clinical_translation: "Score suggests mild anxiety symptoms; monitoring and self-management strategies are reasonable.",
            },
        ),
        (
            (Anxiety, Mild, Es),
            Interpretation {
                recommendation: "Tus nervios andan trabajando horas extra. Las pausas de respiración y anclaje son un buen hábito diario.",
                clinical_translation: "La puntuación sugiere síntomas de ansiedad leves; es razonable monitorear y usar estrategias de automanejo.",
            },
        ),
        (
            (Anxiety, Moderate, En),
            Interpretation {
                recommendation: "Worry is taking up real space in your day. Talking with a doctor or counselor can help you get ahead of it.",
                clinical_translation: "Score suggests moderate anxiety symptoms; clinical evaluation is recommended.",
            },
        ),
        (
            (Anxiety, Moderate, Es),
            Interpretation {
                recommendation: "La preocupación está ocupando espacio real en tu día. Hablar con un doctor o consejero puede ayudarte a adelantarte.",
                clinical_translation: "La puntuación sugiere síntomas de ansiedad moderados; se recomienda evaluación clínica.",
            },
        ),
        (
            (Anxiety, Severe, En),
            Interpretation {
                recommendation: "Anxiety is running the show right now. Please reach out to a clinician soon — this is very treatable.",
                clinical_translation: "Score suggests severe anxiety symptoms; active treatment is indicated.",
            },
        ),
        (
            (Anxiety, Severe, Es),
            Interpretation {
                recommendation: "La ansiedad está llevando el control ahora mismo. Por favor busca pronto a un profesional — esto tiene mucho tratamiento.",
                clinical_translation: "La puntuación sugiere síntomas de ansiedad severos; está indicado tratamiento activo.",
            },
        ),
    ]
});

/// Returns the localized band name shown as the headline result.
pub fn severity_label(severity: Severity, language: Language) -> &'static str {
    match (severity, language) {
        (Severity::Minimal, Language::En) => "Minimal",
        (Severity::Minimal, Language::Es) => "Mínimo",
        (Severity::Mild, Language::En) => "Mild",
        (Severity::Mild, Language::Es) => "Leve",
        (Severity::Moderate, Language::En) => "Moderate",
        (Severity::Moderate, Language::Es) => "Moderado",
        (Severity::ModeratelySevere, Language::En) => "Moderately Severe",
        (Severity::ModeratelySevere, Language::Es) => "Moderadamente severo",
        (Severity::Severe, Language::En) => "Severe",
        (Severity::Severe, Language::Es) => "Severo",
    }
}

/// Returns the severity bands a scale's threshold partition can produce.
///
/// The anxiety instrument has four bands; it never yields
/// `ModeratelySevere`.
pub fn reachable_severities(scale: Scale) -> &'static [Severity] {
    match scale {
        Scale::Mood => Severity::all(),
        Scale::Anxiety => &[
            Severity::Minimal,
            Severity::Mild,
            Severity::Moderate,
            Severity::Severe,
        ],
    }
}

/// Looks up the interpretation entry for a band.
///
/// # Errors
///
/// - `InterpretationMissing` if the combination has no entry (notably
///   the anxiety scale's nonexistent moderately-severe band)
pub fn lookup(
    scale: Scale,
    severity: Severity,
    language: Language,
) -> Result<&'static Interpretation, DomainError> {
    ENTRIES
        .iter()
        .find(|(key, _)| *key == (scale, severity, language))
        .map(|(_, interpretation)| interpretation)
        .ok_or_else(|| {
            DomainError::new(
                ErrorCode::InterpretationMissing,
                format!(
                    "No interpretation for {} scale at {} severity in '{}'",
                    scale, severity, language
                ),
            )
            .with_detail("scale", scale.display_name())
            .with_detail("severity", severity.as_str())
            .with_detail("language", language.code())
        })
}

/// Startup invariant: every reachable (scale, severity, language)
/// combination must have a non-empty entry and label.
///
/// # Errors
///
/// - `InterpretationMissing` naming the first missing or empty entry
pub fn validate_completeness() -> Result<(), DomainError> {
    for scale in Scale::all() {
        for severity in reachable_severities(*scale) {
            for language in Language::all() {
                let entry = lookup(*scale, *severity, *language)?;
                if entry.recommendation.is_empty() || entry.clinical_translation.is_empty() {
                    return Err(DomainError::new(
                        ErrorCode::InterpretationMissing,
                        format!(
                            "Empty interpretation text for {} scale at {} severity in '{}'",
                            scale, severity, language
                        ),
                    ));
                }
                if severity_label(*severity, *language).is_empty() {
                    return Err(DomainError::new(
                        ErrorCode::InterpretationMissing,
                        format!("Empty severity label for {} in '{}'", severity, language),
                    ));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_all_reachable_combinations() {
        assert!(validate_completeness().is_ok());
    }

    #[test]
    fn table_has_eighteen_entries() {
        // 5 mood bands x 2 languages + 4 anxiety bands x 2 languages.
        assert_eq!(ENTRIES.len(), 18);
    }

    #[test]
    fn lookup_finds_mood_moderately_severe() {
        let entry = lookup(Scale::Mood, Severity::ModeratelySevere, Language::En).unwrap();
        assert!(!entry.recommendation.is_empty());
    }

    #[test]
    fn lookup_fails_for_anxiety_moderately_severe() {
        let result = lookup(Scale::Anxiety, Severity::ModeratelySevere, Language::En);
        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::InterpretationMissing);
        assert_eq!(err.details.get("severity").map(String::as_str), Some("moderately-severe"));
    }

    #[test]
    fn reachable_severities_mood_has_five_bands() {
        assert_eq!(reachable_severities(Scale::Mood).len(), 5);
    }

    #[test]
    fn reachable_severities_anxiety_has_four_bands() {
        let bands = reachable_severities(Scale::Anxiety);
        assert_eq!(bands.len(), 4);
        assert!(!bands.contains(&Severity::ModeratelySevere));
    }

    #[test]
    fn severity_labels_are_localized() {
        assert_eq!(severity_label(Severity::Severe, Language::En), "Severe");
        assert_eq!(severity_label(Severity::Severe, Language::Es), "Severo");
        assert_eq!(
            severity_label(Severity::ModeratelySevere, Language::Es),
            "Moderadamente severo"
        );
    }

    #[test]
    fn entries_differ_between_languages() {
        let en = lookup(Scale::Mood, Severity::Moderate, Language::En).unwrap();
        let es = lookup(Scale::Mood, Severity::Moderate, Language::Es).unwrap();
        assert_ne!(en.recommendation, es.recommendation);
    }
}

//! Advocacy script generator.
//!
//! Produces the first-person script a respondent can read to a clinician.
//! Two branches per language: a minimal template when both scores are
//! below the minimal threshold, otherwise the standard template with both
//! scores interpolated.

use crate::domain::foundation::Language;
use crate::domain::scoring::{ScaleResult, ScoringEngine};

/// Builds the localized advocacy script for the given results.
pub fn advocacy_script(mood: &ScaleResult, anxiety: &ScaleResult, language: Language) -> String {
    let minimal = ScoringEngine::is_minimal(mood, anxiety);

    match (language, minimal) {
        (Language::En, true) => format!(
            "\"I completed a wellness screening using validated PHQ-9 and GAD-7 tools. \
             My results indicate minimal clinical symptoms (Score {}/{}). I am currently \
             doing alright and would like to proactively discuss maintaining my wellness \
             and staying on top of my mental health.\"",
            mood.score, anxiety.score
        ),
        (Language::En, false) => format!(
            "\"I completed a wellness screening using validated PHQ-9 and GAD-7 tools. \
             My results indicate a score of {} for mood and {} for anxiety. I would like \
             to discuss how my current environmental stressors and life transitions are \
             impacting my daily quality of life.\"",
            mood.score, anxiety.score
        ),
        (Language::Es, true) => format!(
            "\"Completé un chequeo de bienestar usando las herramientas validadas PHQ-9 y \
             GAD-7. Mis resultados indican síntomas clínicos mínimos (Puntuación {}/{}). \
             Me siento bien por ahora y me gustaría hablar proactivamente sobre cómo \
             mantener mi bienestar y mi salud mental.\"",
            mood.score, anxiety.score
        ),
        (Language::Es, false) => format!(
            "\"Completé un chequeo de bienestar usando las herramientas validadas PHQ-9 y \
             GAD-7. Mis resultados indican una puntuación de {} para el ánimo y {} para \
             la ansiedad. Me gustaría hablar sobre cómo mis factores de estrés \
             ambientales y transiciones de vida actuales están afectando mi calidad de \
             vida diaria.\"",
            mood.score, anxiety.score
        ),
    }
}

//! Downloadable report generator.
//!
//! Renders a localized plain-text report for a session: per-question
//! answers, life-event and stressor selections, both scale results, the
//! advocacy script, and the crisis resources. Pure string assembly over
//! already-computed data.

use std::fmt::Write;

use crate::domain::catalog::{
    option_by_id, questions, LocalizedText, LIFE_EVENTS, STRESSORS,
};
use crate::domain::foundation::{Language, Timestamp};
use crate::domain::scoring::ScaleResult;
use crate::domain::session::AssessmentSession;

const TITLE: LocalizedText = LocalizedText::new(
    "THE VIBE CHECK — WELLNESS REPORT",
    "THE VIBE CHECK — REPORTE DE BIENESTAR",
);
const DATE_LABEL: LocalizedText = LocalizedText::new("Date", "Fecha");
const ANSWERS_HEADING: LocalizedText =
    LocalizedText::new("YOUR CHECK-IN ANSWERS", "TUS RESPUESTAS DEL CHEQUEO");
const LIFE_EVENTS_HEADING: LocalizedText = LocalizedText::new(
    "LIFE EVENTS & TRANSITIONS",
    "EVENTOS Y TRANSICIONES DE VIDA",
);
const STRESSORS_HEADING: LocalizedText =
    LocalizedText::new("EVERYDAY STRESSORS", "FACTORES DE ESTRÉS DIARIOS");
const RESULTS_HEADING: LocalizedText = LocalizedText::new("RESULTS", "RESULTADOS");
const SCRIPT_HEADING: LocalizedText = LocalizedText::new(
    "WHAT TO SAY AT YOUR APPOINTMENT",
    "QUÉ DECIR EN TU CITA",
);
const CRISIS_HEADING: LocalizedText =
    LocalizedText::new("CRISIS RESOURCES", "RECURSOS DE CRISIS");
const CLINICAL_LABEL: LocalizedText = LocalizedText::new(
    "Clinical interpretation",
    "Interpretación clínica",
);
const UNANSWERED: LocalizedText = LocalizedText::new("(unanswered)", "(sin responder)");
const NONE_SELECTED: LocalizedText = LocalizedText::new("None selected", "Ninguno seleccionado");

/// Renders the downloadable plain-text report.
pub fn render_report(
    session: &AssessmentSession,
    mood: &ScaleResult,
    anxiety: &ScaleResult,
    script: &str,
    crisis_lines: &str,
    date: &Timestamp,
) -> String {
    let language = session.language();
    let mut out = String::new();

    let _ = writeln!(out, "{}", TITLE.get(language));
    let _ = writeln!(out, "Health Matters Clinic");
    let _ = writeln!(out, "{}: {}", DATE_LABEL.get(language), date.date_line());

    let _ = writeln!(out, "\n{}", ANSWERS_HEADING.get(language));
    for question in questions() {
        let response = session
            .answers()
            .get(&question.id)
            .map(|value| value.label(language))
            .unwrap_or(UNANSWERED.get(language));
        let _ = writeln!(
            out,
            "  [{}] {} — {}",
            question.scale.display_name(),
            question.text.get(language),
            response
        );
    }

    write_selection_section(
        &mut out,
        LIFE_EVENTS_HEADING.get(language),
        session.life_events(),
        LIFE_EVENTS,
        language,
    );
    write_selection_section(
        &mut out,
        STRESSORS_HEADING.get(language),
        session.stressors(),
        STRESSORS,
        language,
    );

    let _ = writeln!(out, "\n{}", RESULTS_HEADING.get(language));
    for result in [mood, anxiety] {
        let _ = writeln!(
            out,
            "  {} ({}): {} — {}",
            result.scale.display_name(),
            result.scale.instrument_name(),
            result.score,
            result.label
        );
        let _ = writeln!(out, "  {}", result.recommendation);
        let _ = writeln!(
            out,
            "  {}: \"{}\"",
            CLINICAL_LABEL.get(language),
            result.clinical_translation
        );
    }

    let _ = writeln!(out, "\n{}", SCRIPT_HEADING.get(language));
    let _ = writeln!(out, "  {}", script);

    let _ = writeln!(out, "\n{}", CRISIS_HEADING.get(language));
    for line in crisis_lines.lines() {
        let _ = writeln!(out, "  {}", line);
    }

    out
}

fn write_selection_section(
    out: &mut String,
    heading: &str,
    selected: &[String],
    catalog: &[crate::domain::catalog::SelectionOption],
    language: Language,
) {
    let _ = writeln!(out, "\n{}", heading);
    if selected.is_empty() {
        let _ = writeln!(out, "  {}", NONE_SELECTED.get(language));
        return;
    }
    for id in selected {
        // Selections were validated against the catalog when toggled.
        if let Some(option) = option_by_id(catalog, id) {
            let _ = writeln!(out, "  - {}", option.label.get(language));
        }
    }
}

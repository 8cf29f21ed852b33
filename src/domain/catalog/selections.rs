//! Selection catalogs - life events, everyday stressors, coping tools.
//!
//! These feed the context screens and the game plan builder. They are
//! display/selection data only; none of them contribute to scale scores.

use serde::Serialize;

use super::LocalizedText;

/// A selectable option identified by a stable id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionOption {
    pub id: &'static str,
    pub label: LocalizedText,
}

impl SelectionOption {
    const fn new(id: &'static str, en: &'static str, es: &'static str) -> Self {
        Self {
            id,
            label: LocalizedText::new(en, es),
        }
    }
}

/// Major life events and transitions the respondent can flag.
pub const LIFE_EVENTS: &[SelectionOption] = &[
    SelectionOption::new(
        "grief",
        "Loss of a loved one / Grief",
        "Pérdida de un ser querido / Duelo",
    ),
    SelectionOption::new(
        "breakup",
        "Breakup, Divorce, or Ending",
        "Ruptura, Divorcio o Final",
    ),
    SelectionOption::new(
        "career",
        "Job Loss or Career Change",
        "Pérdida de trabajo o cambio de carrera",
    ),
    SelectionOption::new(
        "parent",
        "New parent / Postpartum / Pregnancy",
        "Nuevo padre/madre / Posparto / Embarazo",
    ),
    SelectionOption::new(
        "justice",
        "Recently released from prison or supporting a returning family member",
        "Recientemente liberado de prisión o apoyando a un familiar que regresa",
    ),
    SelectionOption::new(
        "immigration",
        "Immigration-related incident or stress",
        "Incidente o estrés relacionado con migración",
    ),
    SelectionOption::new(
        "trauma",
        "Scary or traumatic event",
        "Evento fuerte o traumático",
    ),
];

/// Social-determinant stressors (housing, food, money, safety...).
pub const STRESSORS: &[SelectionOption] = &[
    SelectionOption::new("housing", "Stable Housing", "Vivienda estable"),
    SelectionOption::new("food", "Food / Groceries", "Comida / Supermercado"),
    SelectionOption::new(
        "transportation",
        "Getting Around / Bus / Car",
        "Transporte / Bus / Carro",
    ),
    SelectionOption::new("bills", "Bills / Money stress", "Biles / Estrés de dinero"),
    SelectionOption::new(
        "job",
        "Work / Job security",
        "Trabajo / Estabilidad laboral",
    ),
    SelectionOption::new("safety", "Safety at home", "Seguridad en casa"),
    SelectionOption::new("childcare", "Childcare support", "Apoyo con los niños"),
];

/// Coping tools offered in the game plan inventory step.
pub const COPING_TOOLS: &[SelectionOption] = &[
    SelectionOption::new("breathing", "Breathing break", "Pausa de respiración"),
    SelectionOption::new("grounding", "Grounding (5-4-3-2-1)", "Anclaje (5-4-3-2-1)"),
    SelectionOption::new("music", "Music shift", "Cambio de música"),
    SelectionOption::new("body", "Move body", "Mover cuerpo"),
    SelectionOption::new("scroll", "Step back from scroll", "Aléjate del teléfono"),
    SelectionOption::new("journal", "Journal", "Diario"),
    SelectionOption::new("call", "Call someone", "Llamar a alguien"),
];

/// Finds an option by id within a catalog.
pub fn option_by_id<'a>(
    catalog: &'a [SelectionOption],
    id: &str,
) -> Option<&'a SelectionOption> {
    catalog.iter().find(|opt| opt.id == id)
}

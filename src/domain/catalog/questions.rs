//! Question catalog - the fixed, ordered sequence of scored items.
//!
//! The 16 items are defined once at process start and never change:
//! nine mood items (`p1`-`p9`, PHQ-9) followed by seven anxiety items
//! (`g1`-`g7`, GAD-7). Navigation relies on this positional order;
//! scoring relies only on the id prefix.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::LocalizedText;
use crate::domain::foundation::{QuestionId, Scale};

/// A single scored questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: LocalizedText,
    pub scale: Scale,
}

fn item(id: &'static str, en: &'static str, es: &'static str) -> Question {
    let id = QuestionId::try_new(id).expect("catalog item ids are scale-prefixed");
    let scale = id.scale();
    Question {
        id,
        text: LocalizedText::new(en, es),
        scale,
    }
}

static QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        item(
            "p1",
            "Stuff you usually love just isn't hitting the same",
            "Las cosas que normalmente te gustan ya no se sienten igual",
        ),
        item(
            "p2",
            "Feeling down, heavy, or like nothing's going to get better",
            "Te sientes decaído, con un peso encima, o como que nada va a mejorar",
        ),
        item(
            "p3",
            "Trouble falling asleep, staying asleep, or sleeping way too much",
            "Problemas para dormir, quedarte dormido, o duermes demasiado",
        ),
        item(
            "p4",
            "Running on empty — tired all the time, no energy",
            "Andas sin pila — cansado todo el tiempo, sin energía",
        ),
        item(
            "p5",
            "Eating way less than usual, or way more",
            "Comes mucho menos que antes, o mucho más",
        ),
        item(
            "p6",
            "Feeling like you're failing, or that you've let yourself or your family down",
            "Sientes que estás fallando, o que has decepcionado a tu familia o a ti mismo",
        ),
        item(
            "p7",
            "Hard to focus — on work, the TV, even your phone",
            "Te cuesta concentrarte — en el trabajo, la tele, hasta en el teléfono",
        ),
        item(
            "p8",
            "Moving or talking so slow people notice — or so restless you can't sit still",
            "Te mueves o hablas tan lento que la gente lo nota — o tan inquieto que no puedes parar",
        ),
        item(
            "p9",
            "Thoughts that you'd be better off gone, or of hurting yourself",
            "Pensamientos de que estarías mejor muerto, o de hacerte daño",
        ),
        item(
            "g1",
            "Feeling nervous, anxious, or on edge",
            "Te sientes nervioso, ansioso o al borde",
        ),
        item(
            "g2",
            "Worrying you just can't switch off",
            "Preocupaciones que no puedes apagar",
        ),
        item(
            "g3",
            "Worrying about a bunch of different things at once",
            "Te preocupas por muchas cosas a la vez",
        ),
        item(
            "g4",
            "Trouble relaxing, even when you get a minute",
            "No logras relajarte, ni cuando tienes un minuto",
        ),
        item(
            "g5",
            "So restless it's hard to sit still",
            "Tan inquieto que te cuesta quedarte quieto",
        ),
        item(
            "g6",
            "Getting annoyed or irritated real quick",
            "Te molestas o te irritas bien rápido",
        ),
        item(
            "g7",
            "Feeling like something bad is about to happen",
            "Sientes que algo malo está por pasar",
        ),
    ]
});

/// Returns the fixed, ordered question sequence. Stable across calls.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// Returns the total number of scored items.
pub fn question_count() -> usize {
    QUESTIONS.len()
}

/// Returns the item at the given position in the walk, if in bounds.
pub fn question_at(index: usize) -> Option<&'static Question> {
    QUESTIONS.get(index)
}

/// Returns the item with the given id, if it exists in the catalog.
pub fn question_by_id(id: &QuestionId) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| &q.id == id)
}

/// Returns the number of items belonging to a scale.
pub fn scale_item_count(scale: Scale) -> usize {
    QUESTIONS.iter().filter(|q| q.scale == scale).count()
}

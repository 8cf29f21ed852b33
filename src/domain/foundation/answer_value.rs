//! AnswerValue value object for item responses (0-3 frequency scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Language, ValidationError};

/// Frequency response to a single questionnaire item, over the last two
/// weeks: 0 (not at all) to 3 (nearly every day).
///
/// Construction rejects out-of-range integers: callers go through
/// [`AnswerValue::try_from_u8`], so a recorded score can never include a
/// value outside the instrument's range.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum AnswerValue {
    #[default]
    NotAtAll = 0,
    SeveralDays = 1,
    MoreThanHalf = 2,
    NearlyEveryDay = 3,
}

impl AnswerValue {
    /// Creates an AnswerValue from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            0 => Ok(AnswerValue::NotAtAll),
            1 => Ok(AnswerValue::SeveralDays),
            2 => Ok(AnswerValue::MoreThanHalf),
            3 => Ok(AnswerValue::NearlyEveryDay),
            _ => Err(ValidationError::out_of_range(
                "answer",
                0,
                3,
                value as i32,
            )),
        }
    }

    /// Returns all response values in ascending order.
    pub fn all() -> &'static [AnswerValue] {
        &[
            AnswerValue::NotAtAll,
            AnswerValue::SeveralDays,
            AnswerValue::MoreThanHalf,
            AnswerValue::NearlyEveryDay,
        ]
    }

    /// Returns the numeric score contribution.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the localized response label shown to the respondent.
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (AnswerValue::NotAtAll, Language::En) => "Nah, not me",
            (AnswerValue::NotAtAll, Language::Es) => "No soy yo",
            (AnswerValue::SeveralDays, Language::En) => "A few times",
            (AnswerValue::SeveralDays, Language::Es) => "Un par de veces",
            (AnswerValue::MoreThanHalf, Language::En) => "More often than not",
            (AnswerValue::MoreThanHalf, Language::Es) => "Seguido",
            (AnswerValue::NearlyEveryDay, Language::En) => "Yeah, that's me lately",
            (AnswerValue::NearlyEveryDay, Language::Es) => "Así mero me siento",
        }
    }

    /// Returns true if this response contributes to the score.
    pub fn is_endorsed(&self) -> bool {
        self.value() > 0
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

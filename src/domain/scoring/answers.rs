//! AnswerSet - the respondent's accumulated item responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnswerValue, QuestionId, Scale};

/// Item responses for the current session, keyed by question id.
///
/// Keys are unique; insertion order is irrelevant (iteration is by id).
/// The set grows one key at a time as the respondent walks the
/// questionnaire and is fully replaced on restart. Scoring reads a
/// snapshot and never mutates it; a partially-answered set is valid and
/// yields a provisional score over whatever subset has been answered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    entries: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a response, returning the previous value for this item
    /// if it was already answered.
    pub fn record(&mut self, id: QuestionId, value: AnswerValue) -> Option<AnswerValue> {
        self.entries.insert(id, value)
    }

    /// Returns the response for an item, if answered.
    pub fn get(&self, id: &QuestionId) -> Option<AnswerValue> {
        self.entries.get(id).copied()
    }

    /// Returns true if the item has been answered.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.entries.contains_key(id)
    }

    /// Returns the number of answered items across both scales.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all responses (session restart).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sums the answered values belonging to a scale.
    ///
    /// Missing items contribute nothing, so a mid-assessment call returns
    /// a valid provisional score.
    pub fn scale_score(&self, scale: Scale) -> u16 {
        self.entries
            .iter()
            .filter(|(id, _)| id.scale() == scale)
            .map(|(_, value)| u16::from(value.value()))
            .sum()
    }

    /// Counts the answered items belonging to a scale.
    pub fn answered_for(&self, scale: Scale) -> usize {
        self.entries.iter().filter(|(id, _)| id.scale() == scale).count()
    }

    /// Iterates over all responses in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, AnswerValue)> {
        self.entries.iter().map(|(id, value)| (id, *value))
    }
}

//! The caller's answer selections, built up question by question.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;

/// Mapping from question id to the chosen answer's value.
///
/// One entry per answered question; unanswered questions have no entry.
/// The scorer treats missing or unmatched entries as a zero
/// contribution, so a partial snapshot never aborts scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selections {
    chosen: HashMap<QuestionId, String>,
}

impl Selections {
    /// Creates an empty selection set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the chosen answer value for a question, replacing any
    /// previous choice.
    pub fn record(&mut self, question_id: QuestionId, answer_value: impl Into<String>) {
        self.chosen.insert(question_id, answer_value.into());
    }

    /// Returns the chosen answer value for a question, if any.
    pub fn get(&self, question_id: &QuestionId) -> Option<&str> {
        self.chosen.get(question_id).map(String::as_str)
    }

    /// Whether the question has been answered.
    pub fn contains(&self, question_id: &QuestionId) -> bool {
        self.chosen.contains_key(question_id)
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    /// True if nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Forgets all recorded choices.
    pub fn clear(&mut self) {
        self.chosen.clear();
    }
}

//! Questions, answers, and the validated question bank.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnswerWeight, QuestionId, ValidationError};

use super::AssessmentError;

/// One selectable answer to a question, with its risk weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    value: String,
    label: String,
    weight: AnswerWeight,
}

impl Answer {
    /// Creates an answer, rejecting empty value or label.
    pub fn new(
        value: impl Into<String>,
        label: impl Into<String>,
        weight: u8,
    ) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("answer_value"));
        }
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ValidationError::empty_field("answer_label"));
        }
        Ok(Self {
            value,
            label,
            weight: AnswerWeight::try_new(weight)?,
        })
    }

    /// Returns the answer's value (unique within its question).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the risk weight.
    pub fn weight(&self) -> AnswerWeight {
        self.weight
    }
}

/// A categorized multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    category: String,
    answers: Vec<Answer>,
}

impl Question {
    /// Creates a question, validating text, category, and answer set.
    ///
    /// Answer values must be unique within the question and at least
    /// one answer must be present.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        category: impl Into<String>,
        answers: Vec<Answer>,
    ) -> Result<Self, AssessmentError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("question_text").into());
        }
        let category = category.into();
        if category.trim().is_empty() {
            return Err(ValidationError::empty_field("question_category").into());
        }
        if answers.is_empty() {
            return Err(ValidationError::empty_field("answers").into());
        }

        let mut seen = HashSet::new();
        for answer in &answers {
            if !seen.insert(answer.value()) {
                return Err(AssessmentError::DuplicateAnswer {
                    question: id.as_str().to_string(),
                    value: answer.value().to_string(),
                });
            }
        }

        Ok(Self {
            id,
            text,
            category,
            answers,
        })
    }

    /// Returns the question id.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Returns the question text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the category this question contributes to.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the answers in presentation order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Looks up an answer by its value.
    pub fn answer(&self, value: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.value() == value)
    }

    /// The heaviest weight among this question's answers.
    ///
    /// Used to derive the category maximum instead of assuming every
    /// question tops out at the scale maximum.
    pub fn max_weight(&self) -> AnswerWeight {
        self.answers
            .iter()
            .map(|a| a.weight())
            .max()
            .unwrap_or(AnswerWeight::ZERO)
    }
}

/// The fixed, ordered set of questions an assessment runs through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Creates a bank, rejecting empty input and duplicate question ids.
    pub fn new(questions: Vec<Question>) -> Result<Self, AssessmentError> {
        if questions.is_empty() {
            return Err(AssessmentError::EmptyQuestionBank);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id().as_str()) {
                return Err(AssessmentError::DuplicateQuestion {
                    id: question.id().as_str().to_string(),
                });
            }
        }

        Ok(Self { questions })
    }

    /// Number of questions in the bank.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// A bank is never empty; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Returns the question at the given position.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Iterates questions in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for question in &self.questions {
            if !categories.contains(&question.category()) {
                categories.push(question.category());
            }
        }
        categories
    }

    /// Groups questions by category, preserving first-seen category
    /// order and the original relative question order within a group.
    pub fn grouped_by_category(&self) -> Vec<(&str, Vec<&Question>)> {
        let mut groups: Vec<(&str, Vec<&Question>)> = Vec::new();
        for question in &self.questions {
            match groups.iter_mut().find(|(c, _)| *c == question.category()) {
                Some((_, members)) => members.push(question),
                None => groups.push((question.category(), vec![question])),
            }
        }
        groups
    }
}

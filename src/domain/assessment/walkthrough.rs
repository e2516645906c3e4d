//! Question-by-question assessment flow owned by the presenting layer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

use super::{AssessmentError, Question, Questionnaire, RiskResult, RiskScorer, Selections};

/// Position in the assessment flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalkthroughState {
    /// Presenting the question at this index.
    Asking(usize),
    /// All questions answered; results are available.
    Completed,
}

/// Mutable state of one run through a questionnaire.
///
/// Owns the selections and the current position; scoring itself stays
/// in [`RiskScorer`] and runs on an immutable snapshot when the last
/// question is answered. Going back never discards recorded choices;
/// restarting discards everything.
#[derive(Debug, Clone)]
pub struct Walkthrough<'q> {
    questionnaire: &'q Questionnaire,
    state: WalkthroughState,
    selections: Selections,
    results: Option<Vec<RiskResult>>,
}

impl<'q> Walkthrough<'q> {
    /// Starts a walkthrough at the first question.
    pub fn new(questionnaire: &'q Questionnaire) -> Self {
        Self {
            questionnaire,
            state: WalkthroughState::Asking(0),
            selections: Selections::new(),
            results: None,
        }
    }

    /// Current flow position.
    pub fn state(&self) -> WalkthroughState {
        self.state
    }

    /// The question currently presented, or None once completed.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            WalkthroughState::Asking(index) => self.questionnaire.bank().get(index),
            WalkthroughState::Completed => None,
        }
    }

    /// Fraction of the flow already passed, as a percentage.
    pub fn progress(&self) -> Percentage {
        match self.state {
            WalkthroughState::Asking(index) => {
                Percentage::from_ratio(index as u32, self.questionnaire.len() as u32)
            }
            WalkthroughState::Completed => Percentage::HUNDRED,
        }
    }

    /// The selections recorded so far.
    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    /// Results computed on completion, if any.
    pub fn results(&self) -> Option<&[RiskResult]> {
        self.results.as_deref()
    }

    /// True once the last question has been answered.
    pub fn is_complete(&self) -> bool {
        self.state == WalkthroughState::Completed
    }

    /// Records the chosen answer for the current question and advances.
    ///
    /// Answering the last question computes the results and moves the
    /// flow to `Completed`. The value must belong to the current
    /// question's answer set; the presenting layer only offers those.
    pub fn answer(&mut self, value: &str) -> Result<(), AssessmentError> {
        let index = match self.state {
            WalkthroughState::Asking(index) => index,
            WalkthroughState::Completed => return Err(AssessmentError::AlreadyCompleted),
        };

        // Index is always in range while asking.
        let question = self
            .questionnaire
            .bank()
            .get(index)
            .ok_or(AssessmentError::AlreadyCompleted)?;

        if question.answer(value).is_none() {
            return Err(AssessmentError::UnknownAnswer {
                question: question.id().as_str().to_string(),
                value: value.to_string(),
            });
        }

        self.selections.record(question.id().clone(), value);

        if index + 1 < self.questionnaire.len() {
            self.state = WalkthroughState::Asking(index + 1);
        } else {
            self.results = Some(RiskScorer::score(self.questionnaire, &self.selections)?);
            self.state = WalkthroughState::Completed;
        }
        Ok(())
    }

    /// Steps back to the previous question without clearing the choice
    /// already recorded there. Returns false at the first question or
    /// after completion.
    pub fn back(&mut self) -> bool {
        match self.state {
            WalkthroughState::Asking(index) if index > 0 => {
                self.state = WalkthroughState::Asking(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Returns to the first question, clearing selections and results.
    pub fn restart(&mut self) {
        self.state = WalkthroughState::Asking(0);
        self.selections.clear();
        self.results = None;
    }
}

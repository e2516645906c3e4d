//! Error types for the assessment module.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, RiskLevel, ValidationError};

/// Errors raised while building or scoring a questionnaire.
///
/// Everything here is a configuration defect: the question bank and
/// recommendation table are fixed at startup, so these errors belong in
/// startup validation and tests, never in front of an end user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("Question bank cannot be empty")]
    EmptyQuestionBank,

    #[error("Duplicate question id '{id}'")]
    DuplicateQuestion { id: String },

    #[error("Duplicate answer value '{value}' in question '{question}'")]
    DuplicateAnswer { question: String, value: String },

    #[error("Duplicate recommendation category '{category}'")]
    DuplicateCategory { category: String },

    #[error("No {level} recommendations configured for category '{category}'")]
    MissingRecommendations {
        category: String,
        level: RiskLevel,
    },

    #[error("Cannot answer: the assessment is already completed")]
    AlreadyCompleted,

    #[error("Answer value '{value}' does not belong to question '{question}'")]
    UnknownAnswer { question: String, value: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        let code = match &err {
            AssessmentError::EmptyQuestionBank
            | AssessmentError::DuplicateQuestion { .. }
            | AssessmentError::DuplicateAnswer { .. }
            | AssessmentError::DuplicateCategory { .. } => ErrorCode::QuestionnaireInvalid,
            AssessmentError::MissingRecommendations { .. } => ErrorCode::RecommendationsMissing,
            AssessmentError::AlreadyCompleted => ErrorCode::AssessmentAlreadyCompleted,
            AssessmentError::UnknownAnswer { .. } => ErrorCode::ValidationFailed,
            AssessmentError::Validation(_) => ErrorCode::ValidationFailed,
        };
        DomainError::new(code, err.to_string())
    }
}

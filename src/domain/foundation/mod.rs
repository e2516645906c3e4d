//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Risk Compass domain.

mod errors;
mod ids;
mod percentage;
mod risk_level;
mod severity;
mod star_rating;
mod state_machine;
mod timestamp;
mod weight;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ConsultantId, FeedbackId, QuestionId};
pub use percentage::Percentage;
pub use risk_level::RiskLevel;
pub use severity::Severity;
pub use star_rating::StarRating;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
pub use weight::AnswerWeight;

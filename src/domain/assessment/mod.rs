//! Assessment module - Questionnaire data model, scoring engine, and flow.
//!
//! The engine converts a snapshot of answer selections into one
//! normalized risk result per question category. Scoring is a pure
//! function over the immutable questionnaire tables; the `Walkthrough`
//! aggregate carries the mutable question-by-question state on behalf
//! of the presenting layer.

mod errors;
mod question;
mod questionnaire;
mod recommendation;
mod scorer;
mod selections;
mod walkthrough;

pub use errors::AssessmentError;
pub use question::{Answer, Question, QuestionBank};
pub use questionnaire::Questionnaire;
pub use recommendation::{CategoryAdvice, RecommendationTable};
pub use scorer::{RiskResult, RiskScorer};
pub use selections::Selections;
pub use walkthrough::{Walkthrough, WalkthroughState};

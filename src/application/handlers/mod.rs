//! Command handlers.

pub mod feedback;

pub use feedback::{SubmitFeedbackCommand, SubmitFeedbackHandler, SubmitFeedbackResult};

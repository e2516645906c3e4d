//! Feedback command handlers.

mod submit_feedback_handler;

pub use submit_feedback_handler::{
    SubmitFeedbackCommand, SubmitFeedbackHandler, SubmitFeedbackResult,
};

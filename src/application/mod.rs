//! Application layer - Commands and Handlers.
//!
//! Orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{SubmitFeedbackCommand, SubmitFeedbackHandler, SubmitFeedbackResult};

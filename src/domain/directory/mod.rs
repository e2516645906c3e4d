//! Directory module - Consultant profiles, reviews, and feedback.

mod consultant;
mod feedback;
mod review;

pub use consultant::{Consultant, ContactDetails};
pub use feedback::{FeedbackDraft, FeedbackReceipt, FeedbackStatus};
pub use review::Review;

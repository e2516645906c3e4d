//! Delivery of validated feedback submissions.

use async_trait::async_trait;

use crate::domain::directory::{FeedbackDraft, FeedbackReceipt};
use crate::domain::foundation::DomainError;

/// Outbound port for submitting feedback.
///
/// The platform has no backend; the shipped implementation simulates
/// delivery and acknowledges with a moderation notice.
#[async_trait]
pub trait FeedbackGateway: Send + Sync {
    /// Submits a draft and returns the acknowledgment receipt.
    async fn submit(&self, draft: &FeedbackDraft) -> Result<FeedbackReceipt, DomainError>;
}

//! SubmitFeedbackHandler - Validates and forwards feedback submissions.
//!
//! Checks that the addressed consultant exists, builds a validated
//! draft from the raw form input, and hands it to the feedback gateway.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::directory::{FeedbackDraft, FeedbackStatus};
use crate::domain::foundation::{
    ConsultantId, DomainError, ErrorCode, FeedbackId, StarRating, Timestamp,
};
use crate::ports::{ConsultantReader, FeedbackGateway};

/// Raw feedback form input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitFeedbackCommand {
    pub name: String,
    pub email: String,
    pub consultant_id: String,
    pub rating: u8,
    pub message: String,
}

/// Outcome of a feedback submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitFeedbackResult {
    pub feedback_id: FeedbackId,
    pub status: FeedbackStatus,
    pub submitted_at: Timestamp,
    pub acknowledgment: String,
}

/// Handles the SubmitFeedback command.
pub struct SubmitFeedbackHandler {
    consultants: Arc<dyn ConsultantReader>,
    gateway: Arc<dyn FeedbackGateway>,
}

impl SubmitFeedbackHandler {
    /// Creates a new SubmitFeedbackHandler.
    pub fn new(consultants: Arc<dyn ConsultantReader>, gateway: Arc<dyn FeedbackGateway>) -> Self {
        Self {
            consultants,
            gateway,
        }
    }

    /// Validates the command and submits the feedback.
    pub async fn handle(
        &self,
        command: SubmitFeedbackCommand,
    ) -> Result<SubmitFeedbackResult, DomainError> {
        let consultant_id = ConsultantId::new(command.consultant_id)?;

        let consultant = self
            .consultants
            .find_by_id(&consultant_id)
            .await?
            .ok_or_else(|| {
                warn!(consultant_id = %consultant_id, "feedback addressed to unknown consultant");
                DomainError::new(
                    ErrorCode::ConsultantNotFound,
                    format!("Consultant not found: {}", consultant_id),
                )
            })?;

        let rating = StarRating::try_new(command.rating)?;
        let draft = FeedbackDraft::new(
            command.name,
            command.email,
            consultant.id().clone(),
            rating,
            command.message,
        )?;

        let receipt = self.gateway.submit(&draft).await?;

        info!(
            feedback_id = %receipt.feedback_id,
            consultant_id = %consultant_id,
            "feedback submitted"
        );

        Ok(SubmitFeedbackResult {
            feedback_id: receipt.feedback_id,
            status: receipt.status,
            submitted_at: receipt.submitted_at,
            acknowledgment: receipt.acknowledgment,
        })
    }
}

//! Simulated feedback delivery.
//!
//! There is no backend to deliver to: submission waits out a short
//! delay to mimic a network round trip, records the draft, and
//! acknowledges with a moderation notice.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::directory::{FeedbackDraft, FeedbackReceipt, FeedbackStatus};
use crate::domain::foundation::{DomainError, FeedbackId, Timestamp};
use crate::ports::FeedbackGateway;

/// Delay of the simulated network round trip.
const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Acknowledgment text returned with every receipt.
const ACKNOWLEDGMENT: &str = "Thank you for your feedback. It will be published after moderation.";

/// Feedback gateway that simulates submission with a timed delay.
pub struct SimulatedFeedbackGateway {
    delay: Duration,
    submitted: Mutex<Vec<(FeedbackId, FeedbackDraft)>>,
}

impl SimulatedFeedbackGateway {
    /// Creates a gateway with the default 1.5 second delay.
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DELAY)
    }

    /// Creates a gateway with a custom delay (tests use a short one).
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// Number of drafts accepted so far.
    pub async fn submitted_count(&self) -> usize {
        self.submitted.lock().await.len()
    }
}

impl Default for SimulatedFeedbackGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedbackGateway for SimulatedFeedbackGateway {
    async fn submit(&self, draft: &FeedbackDraft) -> Result<FeedbackReceipt, DomainError> {
        tokio::time::sleep(self.delay).await;

        let feedback_id = FeedbackId::new();
        self.submitted
            .lock()
            .await
            .push((feedback_id, draft.clone()));

        info!(
            feedback_id = %feedback_id,
            consultant_id = %draft.consultant_id(),
            rating = draft.rating().value(),
            "feedback accepted for moderation"
        );

        Ok(FeedbackReceipt {
            feedback_id,
            status: FeedbackStatus::Pending,
            submitted_at: Timestamp::now(),
            acknowledgment: ACKNOWLEDGMENT.to_string(),
        })
    }
}

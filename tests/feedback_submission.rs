//! Integration tests for feedback submission.
//!
//! Wires the handler to the seeded in-memory directory and the
//! simulated gateway, the same composition the presenting layer uses.

use std::sync::Arc;
use std::time::Duration;

use risk_compass::adapters::{InMemoryDirectory, SimulatedFeedbackGateway};
use risk_compass::application::{SubmitFeedbackCommand, SubmitFeedbackHandler};
use risk_compass::domain::directory::FeedbackStatus;
use risk_compass::domain::foundation::ErrorCode;

fn handler_with_gateway() -> (SubmitFeedbackHandler, Arc<SimulatedFeedbackGateway>) {
    let gateway = Arc::new(SimulatedFeedbackGateway::with_delay(Duration::from_millis(5)));
    let handler = SubmitFeedbackHandler::new(Arc::new(InMemoryDirectory::seeded()), gateway.clone());
    (handler, gateway)
}

fn command_for(consultant_id: &str) -> SubmitFeedbackCommand {
    SubmitFeedbackCommand {
        name: "Ivan Sokolov".to_string(),
        email: "ivan@example.com".to_string(),
        consultant_id: consultant_id.to_string(),
        rating: 5,
        message: "Anna helped us bring order to our bookkeeping.".to_string(),
    }
}

#[tokio::test]
async fn feedback_for_seeded_consultant_is_accepted() {
    let (handler, gateway) = handler_with_gateway();

    let result = handler.handle(command_for("1")).await.unwrap();

    assert_eq!(result.status, FeedbackStatus::Pending);
    assert!(result.acknowledgment.contains("moderation"));
    assert_eq!(gateway.submitted_count().await, 1);
}

#[tokio::test]
async fn feedback_for_unknown_consultant_is_rejected_before_submission() {
    let (handler, gateway) = handler_with_gateway();

    let err = handler.handle(command_for("99")).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ConsultantNotFound);
    assert_eq!(gateway.submitted_count().await, 0);
}

#[tokio::test]
async fn invalid_form_input_never_reaches_the_gateway() {
    let (handler, gateway) = handler_with_gateway();

    let mut short_message = command_for("1");
    short_message.message = "Thanks".to_string();
    assert!(handler.handle(short_message).await.is_err());

    let mut bad_email = command_for("2");
    bad_email.email = "ivan-at-example".to_string();
    assert!(handler.handle(bad_email).await.is_err());

    assert_eq!(gateway.submitted_count().await, 0);
}

#[tokio::test]
async fn successive_submissions_get_distinct_receipts() {
    let (handler, _gateway) = handler_with_gateway();

    let first = handler.handle(command_for("1")).await.unwrap();
    let second = handler.handle(command_for("2")).await.unwrap();

    assert_ne!(first.feedback_id, second.feedback_id);
}

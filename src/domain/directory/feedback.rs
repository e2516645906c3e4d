//! Feedback submissions and their moderation lifecycle.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ConsultantId, FeedbackId, StarRating, StateMachine, Timestamp, ValidationError,
};

/// Minimum length of the sender's name.
const MIN_NAME_LEN: usize = 2;

/// Minimum length of the feedback message.
const MIN_MESSAGE_LEN: usize = 10;

/// A validated, not-yet-submitted feedback entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackDraft {
    name: String,
    email: String,
    consultant_id: ConsultantId,
    rating: StarRating,
    message: String,
}

impl FeedbackDraft {
    /// Validates and creates a draft.
    ///
    /// Mirrors the submission form's rules: name of at least 2
    /// characters, a syntactically plausible email, and a message of at
    /// least 10 characters.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        consultant_id: ConsultantId,
        rating: StarRating,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let name_len = name.trim().chars().count();
        if name_len < MIN_NAME_LEN {
            return Err(ValidationError::too_short("name", MIN_NAME_LEN, name_len));
        }

        let email = email.into();
        validate_email(&email)?;

        let message = message.into();
        let message_len = message.trim().chars().count();
        if message_len < MIN_MESSAGE_LEN {
            return Err(ValidationError::too_short(
                "message",
                MIN_MESSAGE_LEN,
                message_len,
            ));
        }

        Ok(Self {
            name,
            email,
            consultant_id,
            rating,
            message,
        })
    }

    /// Sender's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sender's email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Consultant the feedback is about.
    pub fn consultant_id(&self) -> &ConsultantId {
        &self.consultant_id
    }

    /// Star rating given.
    pub fn rating(&self) -> StarRating {
        self.rating
    }

    /// Feedback text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::invalid_format("email", "missing @ symbol"));
    };
    if local.is_empty() {
        return Err(ValidationError::invalid_format("email", "empty local part"));
    }
    if domain.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.')
    {
        return Err(ValidationError::invalid_format("email", "invalid domain"));
    }
    Ok(())
}

/// Moderation state of a submitted feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    /// Submitted, waiting for moderation.
    #[default]
    Pending,
    /// Approved and visible on the profile.
    Published,
    /// Turned down by moderation.
    Rejected,
}

impl StateMachine for FeedbackStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (FeedbackStatus::Pending, FeedbackStatus::Published)
                | (FeedbackStatus::Pending, FeedbackStatus::Rejected)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            FeedbackStatus::Pending => {
                vec![FeedbackStatus::Published, FeedbackStatus::Rejected]
            }
            FeedbackStatus::Published | FeedbackStatus::Rejected => vec![],
        }
    }
}

/// Acknowledgment returned to the sender after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackReceipt {
    pub feedback_id: FeedbackId,
    pub status: FeedbackStatus,
    pub submitted_at: Timestamp,
    /// Human-readable acknowledgment shown to the sender.
    pub acknowledgment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cid() -> ConsultantId {
        ConsultantId::new("1").unwrap()
    }

    fn stars(n: u8) -> StarRating {
        StarRating::try_new(n).unwrap()
    }

    #[test]
    fn draft_accepts_valid_input() {
        let draft = FeedbackDraft::new(
            "Ivan Sokolov",
            "ivan@example.com",
            cid(),
            stars(5),
            "Excellent consultation, very thorough.",
        )
        .unwrap();
        assert_eq!(draft.rating().value(), 5);
    }

    #[test]
    fn draft_rejects_short_name() {
        let result = FeedbackDraft::new(
            "I",
            "ivan@example.com",
            cid(),
            stars(5),
            "Long enough message here.",
        );
        assert_eq!(result, Err(ValidationError::too_short("name", 2, 1)));
    }

    #[test]
    fn draft_rejects_malformed_email() {
        for email in ["no-at-sign", "@example.com", "ivan@", "ivan@nodot", "ivan@.com"] {
            let result = FeedbackDraft::new(
                "Ivan",
                email,
                cid(),
                stars(4),
                "Long enough message here.",
            );
            assert!(result.is_err(), "accepted invalid email {:?}", email);
        }
    }

    #[test]
    fn draft_rejects_short_message() {
        let result = FeedbackDraft::new("Ivan", "ivan@example.com", cid(), stars(4), "Too short");
        assert_eq!(result, Err(ValidationError::too_short("message", 10, 9)));
    }

    #[test]
    fn feedback_status_moderation_transitions() {
        assert_eq!(
            FeedbackStatus::Pending.transition_to(FeedbackStatus::Published),
            Ok(FeedbackStatus::Published)
        );
        assert_eq!(
            FeedbackStatus::Pending.transition_to(FeedbackStatus::Rejected),
            Ok(FeedbackStatus::Rejected)
        );
        assert!(FeedbackStatus::Published
            .transition_to(FeedbackStatus::Pending)
            .is_err());
        assert!(FeedbackStatus::Rejected.is_terminal());
        assert!(!FeedbackStatus::Pending.is_terminal());
    }
}

//! Consultant profiles presented by the platform.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConsultantId, StarRating, ValidationError};

use super::Review;

/// How to reach a consultant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
}

/// A consultant profile with attached reviews.
///
/// The displayed rating is derived from the reviews rather than stored,
/// so it can never drift from the review list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultant {
    id: ConsultantId,
    name: String,
    position: String,
    specializations: Vec<String>,
    years_of_experience: u8,
    bio: String,
    contacts: ContactDetails,
    photo_url: String,
    reviews: Vec<Review>,
}

impl Consultant {
    /// Creates a profile, rejecting an empty name or position.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ConsultantId,
        name: impl Into<String>,
        position: impl Into<String>,
        specializations: Vec<String>,
        years_of_experience: u8,
        bio: impl Into<String>,
        contacts: ContactDetails,
        photo_url: impl Into<String>,
        reviews: Vec<Review>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("consultant_name"));
        }
        let position = position.into();
        if position.trim().is_empty() {
            return Err(ValidationError::empty_field("consultant_position"));
        }
        Ok(Self {
            id,
            name,
            position,
            specializations,
            years_of_experience,
            bio: bio.into(),
            contacts,
            photo_url: photo_url.into(),
            reviews,
        })
    }

    /// Profile id.
    pub fn id(&self) -> &ConsultantId {
        &self.id
    }

    /// Full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Job title.
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Areas of expertise.
    pub fn specializations(&self) -> &[String] {
        &self.specializations
    }

    /// Years of professional experience.
    pub fn years_of_experience(&self) -> u8 {
        self.years_of_experience
    }

    /// Profile description.
    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Contact details.
    pub fn contacts(&self) -> &ContactDetails {
        &self.contacts
    }

    /// Profile photo URL.
    pub fn photo_url(&self) -> &str {
        &self.photo_url
    }

    /// Published reviews, newest first as seeded.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Number of published reviews.
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Mean star rating across reviews; None without reviews.
    pub fn average_rating(&self) -> Option<f64> {
        let ratings: Vec<StarRating> = self.reviews.iter().map(|r| r.rating()).collect();
        StarRating::average(&ratings)
    }
}

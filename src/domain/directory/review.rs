//! A published client review attached to a consultant profile.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StarRating, ValidationError};

/// One client review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    id: String,
    author: String,
    date: NaiveDate,
    rating: StarRating,
    text: String,
}

impl Review {
    /// Creates a review, rejecting empty id or author.
    pub fn new(
        id: impl Into<String>,
        author: impl Into<String>,
        date: NaiveDate,
        rating: StarRating,
        text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("review_id"));
        }
        let author = author.into();
        if author.trim().is_empty() {
            return Err(ValidationError::empty_field("review_author"));
        }
        Ok(Self {
            id,
            author,
            date,
            rating,
            text: text.into(),
        })
    }

    /// Review id, unique within its consultant.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Who wrote the review.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Publication date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Star rating given.
    pub fn rating(&self) -> StarRating {
        self.rating
    }

    /// Review text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stars(n: u8) -> StarRating {
        StarRating::try_new(n).unwrap()
    }

    #[test]
    fn review_holds_its_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let review = Review::new("f1", "Ivan Sokolov", date, stars(5), "Great work").unwrap();
        assert_eq!(review.author(), "Ivan Sokolov");
        assert_eq!(review.rating().value(), 5);
        assert_eq!(review.date(), date);
    }

    #[test]
    fn review_rejects_empty_author() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(Review::new("f1", "", date, stars(4), "text").is_err());
    }
}

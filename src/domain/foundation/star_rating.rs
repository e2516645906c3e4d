//! Star rating value object (1-5 scale) for reviews and feedback.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A one-to-five star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarRating(u8);

impl StarRating {
    /// Creates a StarRating, returning error if outside 1..=5.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&value) {
            return Err(ValidationError::out_of_range(
                "rating",
                1,
                5,
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Averages a set of ratings; empty input yields None.
    pub fn average(ratings: &[StarRating]) -> Option<f64> {
        if ratings.is_empty() {
            return None;
        }
        let total: u32 = ratings.iter().map(|r| u32::from(r.0)).sum();
        Some(f64::from(total) / ratings.len() as f64)
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_rating_accepts_one_through_five() {
        for v in 1..=5 {
            assert_eq!(StarRating::try_new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn star_rating_rejects_zero_and_six() {
        assert!(StarRating::try_new(0).is_err());
        assert!(StarRating::try_new(6).is_err());
    }

    #[test]
    fn star_rating_average_computes_mean() {
        let ratings = vec![
            StarRating::try_new(5).unwrap(),
            StarRating::try_new(5).unwrap(),
            StarRating::try_new(4).unwrap(),
        ];
        let avg = StarRating::average(&ratings).unwrap();
        assert!((avg - 4.666666666666667).abs() < 1e-9);
    }

    #[test]
    fn star_rating_average_empty_is_none() {
        assert!(StarRating::average(&[]).is_none());
    }

    #[test]
    fn star_rating_displays_out_of_five() {
        assert_eq!(format!("{}", StarRating::try_new(4).unwrap()), "4/5");
    }
}

//! Answer weight value object (0-3 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// How much an answer contributes to its category's risk total.
///
/// 0 marks the safest choice, 3 the riskiest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerWeight(u8);

impl AnswerWeight {
    /// No risk contribution.
    pub const ZERO: Self = Self(0);

    /// The heaviest weight an answer can carry.
    pub const MAX: Self = Self(3);

    /// Creates an AnswerWeight, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX.0 {
            return Err(ValidationError::out_of_range(
                "answer_weight",
                0,
                i32::from(Self::MAX.0),
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for AnswerWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_try_new_accepts_full_scale() {
        for v in 0..=3 {
            assert_eq!(AnswerWeight::try_new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn weight_try_new_rejects_above_max() {
        assert!(AnswerWeight::try_new(4).is_err());
        assert!(AnswerWeight::try_new(255).is_err());
    }

    #[test]
    fn weight_constants() {
        assert_eq!(AnswerWeight::ZERO.value(), 0);
        assert_eq!(AnswerWeight::MAX.value(), 3);
        assert_eq!(AnswerWeight::default(), AnswerWeight::ZERO);
    }

    #[test]
    fn weight_ordering_works() {
        assert!(AnswerWeight::ZERO < AnswerWeight::MAX);
    }

    #[test]
    fn weight_serializes_as_number() {
        assert_eq!(serde_json::to_string(&AnswerWeight::MAX).unwrap(), "3");
    }
}

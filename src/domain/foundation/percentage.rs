//! Percentage value object (0-100 scale, fractional).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0.0 and 100.0 inclusive.
///
/// Normalized risk scores and walkthrough progress are fractional
/// (e.g. 2 of 6 points is 33.33%), so the scale is carried as f64.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a new Percentage, clamping to valid range.
    ///
    /// NaN is treated as zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if value.is_nan() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Creates a Percentage from a ratio of earned over maximum.
    ///
    /// A zero maximum yields zero percent rather than a division error.
    pub fn from_ratio(earned: u32, max: u32) -> Self {
        if max == 0 {
            return Self::ZERO;
        }
        Self::new(f64::from(earned) / f64::from(max) * 100.0)
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_accepts_valid_values() {
        assert_eq!(Percentage::new(0.0).value(), 0.0);
        assert_eq!(Percentage::new(50.5).value(), 50.5);
        assert_eq!(Percentage::new(100.0).value(), 100.0);
    }

    #[test]
    fn percentage_new_clamps_out_of_range() {
        assert_eq!(Percentage::new(100.1).value(), 100.0);
        assert_eq!(Percentage::new(-3.0).value(), 0.0);
    }

    #[test]
    fn percentage_new_treats_nan_as_zero() {
        assert_eq!(Percentage::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn percentage_try_new_rejects_out_of_range() {
        assert!(Percentage::try_new(100.01).is_err());
        assert!(Percentage::try_new(-0.01).is_err());
        assert!(Percentage::try_new(33.33).is_ok());
    }

    #[test]
    fn percentage_from_ratio_computes_fraction_of_max() {
        let p = Percentage::from_ratio(2, 6);
        assert!((p.value() - 33.333333333333336).abs() < 1e-9);
        assert_eq!(Percentage::from_ratio(6, 6), Percentage::HUNDRED);
        assert_eq!(Percentage::from_ratio(0, 6), Percentage::ZERO);
    }

    #[test]
    fn percentage_from_ratio_zero_max_is_zero() {
        assert_eq!(Percentage::from_ratio(0, 0), Percentage::ZERO);
    }

    #[test]
    fn percentage_as_fraction_converts_correctly() {
        assert!((Percentage::new(50.0).as_fraction() - 0.5).abs() < f64::EPSILON);
        assert!((Percentage::HUNDRED.as_fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_displays_one_decimal() {
        assert_eq!(format!("{}", Percentage::from_ratio(1, 3)), "33.3%");
        assert_eq!(format!("{}", Percentage::ZERO), "0.0%");
        assert_eq!(format!("{}", Percentage::HUNDRED), "100.0%");
    }

    #[test]
    fn percentage_serializes_to_json() {
        let json = serde_json::to_string(&Percentage::new(42.5)).unwrap();
        assert_eq!(json, "42.5");
    }

    #[test]
    fn percentage_ordering_works() {
        assert!(Percentage::new(25.0) < Percentage::new(75.0));
    }
}

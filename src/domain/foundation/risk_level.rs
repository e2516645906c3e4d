//! Risk level classification derived from a normalized score.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Percentage;

/// Lower bound of the medium band, inclusive.
pub const MEDIUM_THRESHOLD: f64 = 33.0;

/// Lower bound of the high band, inclusive.
pub const HIGH_THRESHOLD: f64 = 66.0;

/// Aggregated risk level for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classifies a normalized score into a risk level.
    ///
    /// Boundary values belong to the next tier up: exactly 33 is
    /// medium, exactly 66 is high.
    pub fn from_score(score: Percentage) -> Self {
        let value = score.value();
        if value < MEDIUM_THRESHOLD {
            RiskLevel::Low
        } else if value < HIGH_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low risk",
            RiskLevel::Medium => "Medium risk",
            RiskLevel::High => "High risk",
        }
    }

    /// All levels, lowest first.
    pub fn all() -> [RiskLevel; 3] {
        [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High]
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_low_below_33() {
        assert_eq!(RiskLevel::from_score(Percentage::ZERO), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(Percentage::new(32.99)), RiskLevel::Low);
    }

    #[test]
    fn level_exactly_33_is_medium() {
        assert_eq!(RiskLevel::from_score(Percentage::new(33.0)), RiskLevel::Medium);
    }

    #[test]
    fn level_medium_below_66() {
        assert_eq!(RiskLevel::from_score(Percentage::new(50.0)), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(Percentage::new(65.99)), RiskLevel::Medium);
    }

    #[test]
    fn level_exactly_66_is_high() {
        assert_eq!(RiskLevel::from_score(Percentage::new(66.0)), RiskLevel::High);
    }

    #[test]
    fn level_high_at_top() {
        assert_eq!(RiskLevel::from_score(Percentage::HUNDRED), RiskLevel::High);
    }

    #[test]
    fn level_labels() {
        assert_eq!(RiskLevel::Low.label(), "Low risk");
        assert_eq!(RiskLevel::Medium.label(), "Medium risk");
        assert_eq!(RiskLevel::High.label(), "High risk");
    }

    #[test]
    fn level_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"medium\"");
        let level: RiskLevel = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(level, RiskLevel::High);
    }

    #[test]
    fn level_ordering_works() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }
}

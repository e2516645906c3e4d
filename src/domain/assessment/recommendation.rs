//! Static advisory text per category and risk level.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::RiskLevel;

use super::AssessmentError;

/// The three per-level recommendation lists for one category.
///
/// All three levels are structural fields, so a missing level cannot be
/// expressed; construction only has to check that each list is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAdvice {
    low: Vec<String>,
    medium: Vec<String>,
    high: Vec<String>,
}

impl CategoryAdvice {
    /// Creates per-level advice lists.
    pub fn new(low: Vec<String>, medium: Vec<String>, high: Vec<String>) -> Self {
        Self { low, medium, high }
    }

    /// Returns the recommendations for a level.
    pub fn for_level(&self, level: RiskLevel) -> &[String] {
        match level {
            RiskLevel::Low => &self.low,
            RiskLevel::Medium => &self.medium,
            RiskLevel::High => &self.high,
        }
    }
}

/// Static mapping from category to per-level recommendations.
///
/// Entries keep their declaration order. Every level of every declared
/// category must carry at least one recommendation; this is enforced at
/// construction so a gap surfaces at startup instead of during scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationTable {
    entries: Vec<(String, CategoryAdvice)>,
}

impl RecommendationTable {
    /// Builds a table, validating category uniqueness and that each
    /// category has every level populated.
    pub fn new(entries: Vec<(String, CategoryAdvice)>) -> Result<Self, AssessmentError> {
        for (index, (category, advice)) in entries.iter().enumerate() {
            if entries[..index].iter().any(|(c, _)| c == category) {
                return Err(AssessmentError::DuplicateCategory {
                    category: category.clone(),
                });
            }
            for level in RiskLevel::all() {
                if advice.for_level(level).is_empty() {
                    return Err(AssessmentError::MissingRecommendations {
                        category: category.clone(),
                        level,
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    /// Whether the table declares the given category.
    pub fn has_category(&self, category: &str) -> bool {
        self.entries.iter().any(|(c, _)| c == category)
    }

    /// Declared categories in declaration order.
    pub fn categories(&self) -> Vec<&str> {
        self.entries.iter().map(|(c, _)| c.as_str()).collect()
    }

    /// Looks up the recommendations for a category and level.
    ///
    /// A missing category is a configuration defect and reported as a
    /// typed error naming the category and level; the table never
    /// substitutes an empty list.
    pub fn advice_for(
        &self,
        category: &str,
        level: RiskLevel,
    ) -> Result<&[String], AssessmentError> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, advice)| advice.for_level(level))
            .ok_or_else(|| AssessmentError::MissingRecommendations {
                category: category.to_string(),
                level,
            })
    }
}

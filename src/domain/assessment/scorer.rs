//! Scoring engine - converts answer selections into per-category results.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, RiskLevel};

use super::{AssessmentError, Questionnaire, Selections};

/// The aggregated outcome for one question category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Category name as declared in the question bank.
    pub category: String,
    /// Earned points as a percentage of the category maximum.
    pub score: Percentage,
    /// Classification of the normalized score.
    pub level: RiskLevel,
    /// Advisory text resolved from the recommendation table.
    pub recommendations: Vec<String>,
}

/// Pure scoring over an immutable questionnaire.
pub struct RiskScorer;

impl RiskScorer {
    /// Scores a selection snapshot, returning one result per category
    /// in first-seen category order.
    ///
    /// Missing selections and values matching none of a question's
    /// answers contribute 0 points and raise no error. The category
    /// maximum is derived from the questions' own heaviest answers
    /// rather than assumed from the weight scale, so an unusual answer
    /// set cannot silently mis-normalize.
    ///
    /// The only failure mode is a recommendation-table gap, which
    /// `Questionnaire` construction already rules out; a hand-assembled
    /// mismatched pair fails here with the offending category and level
    /// named. No partial result sequence is ever returned.
    pub fn score(
        questionnaire: &Questionnaire,
        selections: &Selections,
    ) -> Result<Vec<RiskResult>, AssessmentError> {
        let mut results = Vec::new();

        for (category, questions) in questionnaire.bank().grouped_by_category() {
            let mut total: u32 = 0;
            let mut max_possible: u32 = 0;

            for question in &questions {
                max_possible += u32::from(question.max_weight().value());
                let earned = selections
                    .get(question.id())
                    .and_then(|value| question.answer(value))
                    .map(|answer| u32::from(answer.weight().value()))
                    .unwrap_or(0);
                total += earned;
            }

            let score = Percentage::from_ratio(total, max_possible);
            let level = RiskLevel::from_score(score);
            let recommendations = questionnaire
                .recommendations()
                .advice_for(category, level)?
                .to_vec();

            results.push(RiskResult {
                category: category.to_string(),
                score,
                level,
                recommendations,
            });
        }

        Ok(results)
    }
}

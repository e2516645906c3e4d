//! A question bank paired with its recommendation table, plus the
//! built-in business risk questionnaire.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionId, RiskLevel};

use super::{Answer, AssessmentError, CategoryAdvice, Question, QuestionBank, RecommendationTable};

/// An immutable, internally-consistent questionnaire.
///
/// Construction checks that every question category is covered by the
/// recommendation table for all three levels, turning a would-be
/// runtime lookup failure into a startup error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    bank: QuestionBank,
    recommendations: RecommendationTable,
}

impl Questionnaire {
    /// Pairs a bank with a table, validating coverage.
    pub fn new(
        bank: QuestionBank,
        recommendations: RecommendationTable,
    ) -> Result<Self, AssessmentError> {
        for category in bank.categories() {
            if !recommendations.has_category(category) {
                // The table constructor already guarantees each declared
                // category has all three levels, so the first level
                // stands in for the whole missing entry.
                return Err(AssessmentError::MissingRecommendations {
                    category: category.to_string(),
                    level: RiskLevel::Low,
                });
            }
        }
        Ok(Self {
            bank,
            recommendations,
        })
    }

    /// The question bank.
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// The recommendation table.
    pub fn recommendations(&self) -> &RecommendationTable {
        &self.recommendations
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.bank.len()
    }

    /// A questionnaire is never empty; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.bank.is_empty()
    }

    /// The built-in business risk questionnaire: six questions, two per
    /// category (Financial, Legal, Operational), each with four answers
    /// weighted from 3 (riskiest) down to 0 (safest).
    pub fn standard() -> &'static Questionnaire {
        &STANDARD
    }
}

static STANDARD: Lazy<Questionnaire> = Lazy::new(|| {
    // Static data: constructors cannot fail on these literals.
    build_standard().unwrap_or_else(|e| panic!("built-in questionnaire is invalid: {}", e))
});

const FINANCIAL: &str = "Financial risks";
const LEGAL: &str = "Legal risks";
const OPERATIONAL: &str = "Operational risks";

fn question(
    id: &str,
    text: &str,
    category: &str,
    answers: [(&str, &str, u8); 4],
) -> Result<Question, AssessmentError> {
    let answers = answers
        .into_iter()
        .map(|(value, label, weight)| Answer::new(value, label, weight))
        .collect::<Result<Vec<_>, _>>()?;
    Question::new(QuestionId::new(id)?, text, category, answers)
}

fn advice(low: [&str; 3], medium: [&str; 3], high: [&str; 3]) -> CategoryAdvice {
    let to_vec = |items: [&str; 3]| items.into_iter().map(String::from).collect();
    CategoryAdvice::new(to_vec(low), to_vec(medium), to_vec(high))
}

fn build_standard() -> Result<Questionnaire, AssessmentError> {
    let bank = QuestionBank::new(vec![
        question(
            "q1",
            "How often does your company audit its financial statements?",
            FINANCIAL,
            [
                ("a1", "We don't audit at all", 3),
                ("a2", "Once a year", 2),
                ("a3", "Every six months", 1),
                ("a4", "Every quarter", 0),
            ],
        )?,
        question(
            "q2",
            "Do you keep up-to-date legal documents for all deals and contracts?",
            LEGAL,
            [
                ("a1", "No, we often work without documents", 3),
                ("a2", "Only for major deals", 2),
                ("a3", "Yes, but they are not always kept current", 1),
                ("a4", "Yes, all documents are current and reviewed by lawyers", 0),
            ],
        )?,
        question(
            "q3",
            "How often do you run safety training for employees?",
            OPERATIONAL,
            [
                ("a1", "We never have", 3),
                ("a2", "Only at hiring", 2),
                ("a3", "Once a year", 1),
                ("a4", "Every quarter", 0),
            ],
        )?,
        question(
            "q4",
            "Do you keep reserve funds for unforeseen circumstances?",
            FINANCIAL,
            [
                ("a1", "No", 3),
                ("a2", "Minimal reserves", 2),
                ("a3", "Reserves covering 1-3 months of operations", 1),
                ("a4", "Substantial reserves for six months or more", 0),
            ],
        )?,
        question(
            "q5",
            "How is personal data protected in your company?",
            LEGAL,
            [
                ("a1", "It is not protected at all", 3),
                ("a2", "Basic protection", 2),
                ("a3", "We follow data protection guidelines", 1),
                ("a4", "Comprehensive protection with regular audits", 0),
            ],
        )?,
        question(
            "q6",
            "How diversified is your business?",
            OPERATIONAL,
            [
                ("a1", "One product or service, one market", 3),
                ("a2", "Several products or services, one market", 2),
                ("a3", "Several products or services, several markets", 1),
                ("a4", "A fully diversified business", 0),
            ],
        )?,
    ])?;

    let recommendations = RecommendationTable::new(vec![
        (
            FINANCIAL.to_string(),
            advice(
                [
                    "Keep monitoring financial indicators regularly",
                    "Develop a long-term financial plan",
                    "Look into further optimization opportunities",
                ],
                [
                    "Increase the frequency of financial reviews",
                    "Automate cash-flow monitoring",
                    "Consider engaging a financial consultant",
                ],
                [
                    "Arrange an audit of your financial statements immediately",
                    "Create a reserve fund for unexpected expenses",
                    "Develop a response plan for cash-flow gaps",
                ],
            ),
        ),
        (
            LEGAL.to_string(),
            advice(
                [
                    "Keep your legal documentation up to date",
                    "Track changes in legislation",
                    "Regularly verify compliance with regulations",
                ],
                [
                    "Systematize your legal documents",
                    "Develop templates for recurring contracts",
                    "Set up regular consultations with a lawyer",
                ],
                [
                    "Audit your legal documentation urgently",
                    "Hire a lawyer or retain a law firm",
                    "Update all contracts to match current legislation",
                ],
            ),
        ),
        (
            OPERATIONAL.to_string(),
            advice(
                [
                    "Keep improving operational processes",
                    "Adopt innovative solutions for optimization",
                    "Regularly refresh emergency response plans",
                ],
                [
                    "Organize safety training for employees",
                    "Automate key business processes",
                    "Explore opportunities to diversify the business",
                ],
                [
                    "Run a full audit of your business processes",
                    "Develop a business continuity plan",
                    "Introduce data backup systems",
                ],
            ),
        ),
    ])?;

    Questionnaire::new(bank, recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_has_six_questions_in_three_categories() {
        let questionnaire = Questionnaire::standard();
        assert_eq!(questionnaire.len(), 6);
        assert_eq!(
            questionnaire.bank().categories(),
            vec![FINANCIAL, LEGAL, OPERATIONAL]
        );
    }

    #[test]
    fn standard_questions_each_have_four_weighted_answers() {
        for question in Questionnaire::standard().bank().iter() {
            assert_eq!(question.answers().len(), 4);
            let mut weights: Vec<u8> =
                question.answers().iter().map(|a| a.weight().value()).collect();
            weights.sort_unstable();
            assert_eq!(weights, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn standard_table_covers_every_category_and_level() {
        let questionnaire = Questionnaire::standard();
        for category in questionnaire.bank().categories() {
            for level in RiskLevel::all() {
                let advice = questionnaire
                    .recommendations()
                    .advice_for(category, level)
                    .unwrap();
                assert_eq!(advice.len(), 3);
            }
        }
    }

    #[test]
    fn questionnaire_rejects_uncovered_category() {
        let bank = QuestionBank::new(vec![question(
            "q1",
            "Something",
            "Reputational risks",
            [
                ("a1", "Bad", 3),
                ("a2", "Poor", 2),
                ("a3", "Fair", 1),
                ("a4", "Good", 0),
            ],
        )
        .unwrap()])
        .unwrap();
        let table = RecommendationTable::new(vec![]).unwrap();

        let result = Questionnaire::new(bank, table);
        assert!(matches!(
            result,
            Err(AssessmentError::MissingRecommendations { category, .. })
                if category == "Reputational risks"
        ));
    }
}

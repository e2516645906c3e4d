//! The catalog of risks shown on the map, with the built-in dataset.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Severity, ValidationError};

use super::{MapPosition, RiskCategory, RiskPoint};

/// Ordered collection of cataloged risks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCatalog {
    points: Vec<RiskPoint>,
}

impl RiskCatalog {
    /// Creates a catalog, rejecting duplicate risk ids.
    pub fn new(points: Vec<RiskPoint>) -> Result<Self, ValidationError> {
        for (index, point) in points.iter().enumerate() {
            if points[..index].iter().any(|p| p.id() == point.id()) {
                return Err(ValidationError::invalid_format(
                    "risk_id",
                    format!("duplicate risk id '{}'", point.id()),
                ));
            }
        }
        Ok(Self { points })
    }

    /// All points in catalog order.
    pub fn all(&self) -> &[RiskPoint] {
        &self.points
    }

    /// Number of cataloged risks.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the catalog holds no risks.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Finds a risk by id.
    pub fn find(&self, id: &str) -> Option<&RiskPoint> {
        self.points.iter().find(|p| p.id() == id)
    }

    /// Risks of one category, preserving catalog order.
    pub fn by_category(&self, category: RiskCategory) -> Vec<&RiskPoint> {
        self.points
            .iter()
            .filter(|p| p.category() == category)
            .collect()
    }

    /// Risks at one severity, preserving catalog order.
    pub fn by_severity(&self, severity: Severity) -> Vec<&RiskPoint> {
        self.points
            .iter()
            .filter(|p| p.severity() == severity)
            .collect()
    }

    /// The built-in catalog of six typical business risks.
    pub fn standard() -> &'static RiskCatalog {
        &STANDARD
    }
}

static STANDARD: Lazy<RiskCatalog> = Lazy::new(|| {
    // Static data: constructors cannot fail on these literals.
    build_standard().unwrap_or_else(|e| panic!("built-in risk catalog is invalid: {}", e))
});

fn point(
    id: &str,
    title: &str,
    description: &str,
    category: RiskCategory,
    severity: Severity,
    (x, y): (u8, u8),
    mitigation: &str,
) -> Result<RiskPoint, ValidationError> {
    RiskPoint::new(
        id,
        title,
        description,
        category,
        severity,
        MapPosition::new(x, y)?,
        mitigation,
    )
}

fn build_standard() -> Result<RiskCatalog, ValidationError> {
    RiskCatalog::new(vec![
        point(
            "risk-1",
            "Tax inspections",
            "Improper bookkeeping can lead to fines during a tax inspection.",
            RiskCategory::Financial,
            Severity::High,
            (30, 40),
            "Our experts run a preliminary audit and prepare the company for inspections.",
        )?,
        point(
            "risk-2",
            "Contract problems",
            "Poorly drafted contracts can lead to legal disputes.",
            RiskCategory::Legal,
            Severity::Medium,
            (70, 30),
            "The legal team drafts and reviews every contract for compliance with legislation.",
        )?,
        point(
            "risk-3",
            "Labor law violations",
            "Ignoring labor regulations can lead to lawsuits from employees.",
            RiskCategory::Legal,
            Severity::High,
            (60, 70),
            "We audit HR processes and bring internal policy documents up to date.",
        )?,
        point(
            "risk-4",
            "Operational process failures",
            "Failures in logistics and production can cause delays and lost clients.",
            RiskCategory::Operational,
            Severity::Medium,
            (20, 60),
            "We introduce monitoring and automation systems to minimize failures.",
        )?,
        point(
            "risk-5",
            "Cash-flow gaps",
            "Liquidity problems can leave the company unable to meet its obligations.",
            RiskCategory::Financial,
            Severity::Critical,
            (50, 20),
            "We develop liquidity management and cash-flow planning strategies.",
        )?,
        point(
            "risk-6",
            "Data breaches",
            "A data protection breach can lead to fines and reputational damage.",
            RiskCategory::Operational,
            Severity::Critical,
            (80, 50),
            "We deploy comprehensive information security systems and train staff.",
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_has_six_risks() {
        assert_eq!(RiskCatalog::standard().len(), 6);
    }

    #[test]
    fn standard_covers_every_category() {
        let catalog = RiskCatalog::standard();
        for category in RiskCategory::all() {
            assert_eq!(catalog.by_category(category).len(), 2);
        }
    }

    #[test]
    fn by_category_preserves_catalog_order() {
        let legal = RiskCatalog::standard().by_category(RiskCategory::Legal);
        let ids: Vec<&str> = legal.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["risk-2", "risk-3"]);
    }

    #[test]
    fn by_severity_filters() {
        let critical = RiskCatalog::standard().by_severity(Severity::Critical);
        let ids: Vec<&str> = critical.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["risk-5", "risk-6"]);
    }

    #[test]
    fn find_locates_a_risk() {
        let risk = RiskCatalog::standard().find("risk-5").unwrap();
        assert_eq!(risk.title(), "Cash-flow gaps");
        assert_eq!(risk.severity(), Severity::Critical);
    }

    #[test]
    fn find_unknown_id_is_none() {
        assert!(RiskCatalog::standard().find("risk-99").is_none());
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let a = point(
            "dup",
            "First",
            "desc",
            RiskCategory::Financial,
            Severity::Low,
            (10, 10),
            "mitigation",
        )
        .unwrap();
        let b = point(
            "dup",
            "Second",
            "desc",
            RiskCategory::Legal,
            Severity::Low,
            (20, 20),
            "mitigation",
        )
        .unwrap();
        assert!(RiskCatalog::new(vec![a, b]).is_err());
    }
}

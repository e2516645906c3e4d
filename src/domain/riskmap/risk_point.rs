//! A single cataloged risk and its placement on the map canvas.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Severity, ValidationError};

/// Broad grouping of cataloged risks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Financial,
    Legal,
    Operational,
}

impl RiskCategory {
    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Financial => "Financial",
            RiskCategory::Legal => "Legal",
            RiskCategory::Operational => "Operational",
        }
    }

    /// All categories in display order.
    pub fn all() -> [RiskCategory; 3] {
        [
            RiskCategory::Financial,
            RiskCategory::Legal,
            RiskCategory::Operational,
        ]
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskCategory::Financial => "financial",
            RiskCategory::Legal => "legal",
            RiskCategory::Operational => "operational",
        };
        write!(f, "{}", s)
    }
}

/// Placement on the map canvas, in percent of width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPosition {
    x: u8,
    y: u8,
}

impl MapPosition {
    /// Creates a position, validating both coordinates to 0..=100.
    pub fn new(x: u8, y: u8) -> Result<Self, ValidationError> {
        for (field, value) in [("position_x", x), ("position_y", y)] {
            if value > 100 {
                return Err(ValidationError::out_of_range(field, 0, 100, i32::from(value)));
            }
        }
        Ok(Self { x, y })
    }

    /// Horizontal placement in percent.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Vertical placement in percent.
    pub fn y(&self) -> u8 {
        self.y
    }
}

/// One risk shown on the map, with its mitigation pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskPoint {
    id: String,
    title: String,
    description: String,
    category: RiskCategory,
    severity: Severity,
    position: MapPosition,
    mitigation: String,
}

impl RiskPoint {
    /// Creates a risk point, rejecting empty id or title.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: RiskCategory,
        severity: Severity,
        position: MapPosition,
        mitigation: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("risk_id"));
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("risk_title"));
        }
        Ok(Self {
            id,
            title,
            description: description.into(),
            category,
            severity,
            position,
            mitigation: mitigation.into(),
        })
    }

    /// Stable id of this risk.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Short title shown on the map.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// What can go wrong.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Grouping category.
    pub fn category(&self) -> RiskCategory {
        self.category
    }

    /// How dangerous the risk is.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Placement on the map canvas.
    pub fn position(&self) -> MapPosition {
        self.position
    }

    /// How the consultancy addresses this risk.
    pub fn mitigation(&self) -> &str {
        &self.mitigation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_position_accepts_percent_range() {
        let pos = MapPosition::new(0, 100).unwrap();
        assert_eq!(pos.x(), 0);
        assert_eq!(pos.y(), 100);
    }

    #[test]
    fn map_position_rejects_out_of_range() {
        assert!(MapPosition::new(101, 50).is_err());
        assert!(MapPosition::new(50, 101).is_err());
    }

    #[test]
    fn risk_point_rejects_empty_id() {
        let result = RiskPoint::new(
            "",
            "Tax inspections",
            "desc",
            RiskCategory::Financial,
            Severity::High,
            MapPosition::new(30, 40).unwrap(),
            "mitigation",
        );
        assert!(result.is_err());
    }

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RiskCategory::Operational).unwrap(),
            "\"operational\""
        );
    }
}

//! Risk map module - Catalog of typical business risks.
//!
//! The data and filtering behind the interactive risk map; rendering is
//! left to the presenting layer.

mod catalog;
mod risk_point;

pub use catalog::RiskCatalog;
pub use risk_point::{MapPosition, RiskCategory, RiskPoint};

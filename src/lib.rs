//! Risk Compass - Business risk assessment toolkit.
//!
//! This crate implements the risk-assessment engine behind a consulting
//! platform: a fixed questionnaire of weighted multiple-choice questions,
//! per-category score normalization, risk-level classification, and
//! recommendation lookup, plus the surrounding consultant directory and
//! risk-map catalog.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

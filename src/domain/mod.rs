//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `assessment` - Questionnaire, scoring engine, and walkthrough flow
//! - `riskmap` - Catalog of typical business risks shown on the risk map
//! - `directory` - Consultant profiles, reviews, and feedback submissions

pub mod assessment;
pub mod directory;
pub mod foundation;
pub mod riskmap;

//! Ports - Interfaces between the application core and the outside.
//!
//! Following hexagonal architecture, these traits define what the
//! application needs without prescribing implementations.

mod consultant_reader;
mod feedback_gateway;

pub use consultant_reader::ConsultantReader;
pub use feedback_gateway::FeedbackGateway;

//! Feedback adapters.

mod simulated;

pub use simulated::SimulatedFeedbackGateway;

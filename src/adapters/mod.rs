//! Adapters - Concrete implementations of the ports.

pub mod directory;
pub mod feedback;

pub use directory::InMemoryDirectory;
pub use feedback::SimulatedFeedbackGateway;

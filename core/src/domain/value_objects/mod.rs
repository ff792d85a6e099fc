//! Value objects representing immutable domain concepts.

pub mod availability;
pub mod schedule;

// Re-export commonly used types
pub use availability::AvailabilityCheck;
pub use schedule::{TimeBlock, WeeklySchedule};

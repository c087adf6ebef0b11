//! Journey data model: phases, steps, and the aggregate journey

mod record;
mod step;
mod summary;

pub use record::{Journey, JourneyId};
pub use step::{Emotion, Frequency, JourneyStep, Phase};
pub use summary::JourneySummary;

/// Placeholder for `tool_used` when no tool keyword was found
pub const TOOL_NOT_SPECIFIED: &str = "Not specified";

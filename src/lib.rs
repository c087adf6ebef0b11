//! Journeymap: interview notes to journey maps
//!
//! A heuristic engine that reads free-text interview notes and produces a
//! structured sequence of journey steps, each tagged with a workflow phase,
//! a task, and optional attributes (tool, emotion, pain point, opportunity,
//! quote, collaborators, frequency).
//!
//! # Core Concepts
//!
//! - **Phase**: a named workflow stage ("Song Intake", "Pitching", ...)
//! - **Segment**: the note lines around a phase keyword hit
//! - **Step**: one task plus its attributes, scoped to one phase
//! - **Journey**: every step for one interview plus submitted metadata
//!
//! All matching is driven by ordered [`KeywordTables`]; first match wins
//! for single-valued fields.
//!
//! # Example
//!
//! ```
//! use journeymap::{NoteParser, ParseRequest};
//!
//! let parser = NoteParser::new();
//! let request = ParseRequest::new("Search for song. \"This search is too slow\" she said.")
//!     .with_user_name("Jordan");
//! let journey = parser.parse(&request);
//! assert_eq!(journey.steps[0].key_quote.as_deref(), Some("This search is too slow"));
//! ```

mod error;
pub mod journey;
pub mod keywords;
pub mod mcp;
pub mod parse;

pub use error::{JourneyMapError, JourneyMapResult};
pub use journey::{
    Emotion, Frequency, Journey, JourneyId, JourneyStep, JourneySummary, Phase, TOOL_NOT_SPECIFIED,
};
pub use keywords::{KeywordError, KeywordTables};
pub use parse::{NoteParser, ParseReport, ParseRequest, ParseState, ParserConfig, PhaseSegment};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reject blank notes at a submission boundary.
///
/// The parser accepts blank input; collaborators that collect notes from
/// a user call this first.
pub fn require_notes(notes: &str) -> JourneyMapResult<&str> {
    if notes.trim().is_empty() {
        Err(JourneyMapError::EmptyNotes)
    } else {
        Ok(notes)
    }
}

//! Four-pass heuristic note parser
//!
//! # Architecture
//!
//! - **detect**: which phases the notes mention at all
//! - **segment**: the lines around each phase keyword hit
//! - **task** / **fields**: candidate tasks per segment, then per-task
//!   tool, emotion, pain point, opportunity, quote, collaborators and
//!   frequency
//! - **validate**: drop repeated `(phase, task)` pairs
//!
//! [`NoteParser`] runs the passes in order. No pass can fail: unmatched
//! notes degrade to the default phase list and an empty step list.
//!
//! # Example
//!
//! ```
//! use journeymap::{NoteParser, ParseRequest};
//!
//! let parser = NoteParser::new();
//! let journey = parser.parse(&ParseRequest::new("Arrow upload daily with writers and producers"));
//! assert_eq!(journey.steps[0].tool_used, "Arrow");
//! ```

pub mod detect;
pub mod fields;
mod orchestrator;
pub mod segment;
pub mod task;
mod types;
pub mod validate;

pub use detect::{detect_phases, PhaseDetection};
pub use orchestrator::NoteParser;
pub use segment::PhaseSegment;
pub use types::{ParseReport, ParseRequest, ParseState, ParserConfig};

//! Crate-level error type for the fallible edges around the parser

use crate::keywords::KeywordError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading configuration, reading notes, or writing output.
///
/// Parsing itself never fails; these only arise at the boundaries.
#[derive(Debug, Error)]
pub enum JourneyMapError {
    #[error(transparent)]
    Keywords(#[from] KeywordError),

    #[error("failed to read notes from {path}: {source}")]
    ReadNotes {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("notes are empty")]
    EmptyNotes,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type JourneyMapResult<T> = Result<T, JourneyMapError>;

//! Core types for the note parsing pipeline

use crate::journey::{Phase, TOOL_NOT_SPECIFIED};
use serde::{Deserialize, Serialize};

/// Shortest task length the engine accepts as a threshold
const MIN_TASK_LEN: usize = 15;

/// Engine knobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// A cleaned line becomes a task only if it is longer than this (chars)
    pub min_task_len: usize,
    /// Lines of context taken either side of a keyword hit
    pub context_radius: usize,
    /// `tool_used` value when no tool keyword matched
    pub tool_placeholder: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_task_len: MIN_TASK_LEN,
            context_radius: 2,
            tool_placeholder: TOOL_NOT_SPECIFIED.to_string(),
        }
    }
}

impl ParserConfig {
    /// Clamp knobs that would break journey invariants.
    ///
    /// `min_task_len` never drops below 15 and a blank placeholder becomes
    /// [`TOOL_NOT_SPECIFIED`], so `tool_used` is never empty.
    pub fn normalized(mut self) -> Self {
        self.min_task_len = self.min_task_len.max(MIN_TASK_LEN);
        if self.tool_placeholder.trim().is_empty() {
            self.tool_placeholder = TOOL_NOT_SPECIFIED.to_string();
        }
        self
    }
}

/// The four inputs a submission collaborator hands the parser.
///
/// Only `notes` is interpreted; the rest are copied into the journey.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    pub notes: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub genre_focus: String,
}

impl ParseRequest {
    pub fn new(notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
            ..Default::default()
        }
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_genre_focus(mut self, genre_focus: impl Into<String>) -> Self {
        self.genre_focus = genre_focus.into();
        self
    }
}

/// Pipeline position. Strictly linear; every call starts at `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseState {
    Idle,
    Detecting,
    Segmenting,
    Extracting,
    Validating,
    Done,
}

impl ParseState {
    /// The following state; `Done` is terminal.
    pub fn next(self) -> Self {
        match self {
            Self::Idle => Self::Detecting,
            Self::Detecting => Self::Segmenting,
            Self::Segmenting => Self::Extracting,
            Self::Extracting => Self::Validating,
            Self::Validating | Self::Done => Self::Done,
        }
    }
}

/// Per-pass diagnostics from one parse call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseReport {
    pub phases: Vec<Phase>,
    /// No phase keyword matched and the default phase list was used
    pub used_fallback: bool,
    pub segments: usize,
    /// Steps built before deduplication
    pub candidate_steps: usize,
    pub duplicates_removed: usize,
    pub state: ParseState,
}

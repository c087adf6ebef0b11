//! Note parser orchestrating the four passes
//!
//! Detect phases, segment lines per phase, extract tasks and fields, then
//! deduplicate. The pipeline is a pure function of the request and the
//! keyword tables; only the journey id and upload date read the clock.

use super::detect::detect_phases;
use super::fields::build_step;
use super::segment::{note_lines, segment_by_phase};
use super::task::extract_tasks;
use super::types::{ParseReport, ParseRequest, ParseState, ParserConfig};
use super::validate::dedupe_steps;
use crate::journey::{Journey, JourneyId, JourneyStep};
use crate::keywords::KeywordTables;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

/// Turns free-text interview notes into a [`Journey`].
///
/// Cheap to clone; keyword tables are shared read-only.
#[derive(Debug, Clone)]
pub struct NoteParser {
    tables: Arc<KeywordTables>,
    config: ParserConfig,
}

impl Default for NoteParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteParser {
    /// Parser with the built-in keyword tables and default config
    pub fn new() -> Self {
        Self::with_tables(KeywordTables::default())
    }

    pub fn with_tables(tables: KeywordTables) -> Self {
        Self {
            tables: Arc::new(tables),
            config: ParserConfig::default(),
        }
    }

    /// Replace the engine knobs; see [`ParserConfig::normalized`].
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config.normalized();
        self
    }

    pub fn tables(&self) -> &KeywordTables {
        &self.tables
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse notes, stamping the journey with the current time.
    pub fn parse(&self, request: &ParseRequest) -> Journey {
        self.parse_at(request, Utc::now())
    }

    /// Parse notes with an explicit timestamp.
    pub fn parse_at(&self, request: &ParseRequest, at: DateTime<Utc>) -> Journey {
        self.parse_with_report(request, at).0
    }

    /// Parse after an optional caller-chosen delay.
    ///
    /// The delay only suspends the caller; no work happens during it and
    /// the result is identical to [`NoteParser::parse`].
    pub async fn parse_async(&self, request: &ParseRequest, delay: Duration) -> Journey {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.parse(request)
    }

    /// Parse notes and return per-pass diagnostics alongside the journey.
    pub fn parse_with_report(&self, request: &ParseRequest, at: DateTime<Utc>) -> (Journey, ParseReport) {
        let tables = self.tables.as_ref();
        let mut state = ParseState::Idle;
        tracing::debug!(notes_len = request.notes.len(), "parse started");

        state = self.advance(state);
        let normalized = request.notes.to_lowercase();
        let lines = note_lines(&request.notes);
        let detection = detect_phases(&normalized, tables);

        state = self.advance(state);
        let segments = segment_by_phase(&lines, &detection.phases, tables, self.config.context_radius);

        state = self.advance(state);
        let candidates: Vec<JourneyStep> = segments
            .iter()
            .flat_map(|segment| {
                extract_tasks(segment, tables, self.config.min_task_len)
                    .into_iter()
                    .filter_map(move |task| build_step(segment, &task, tables, &self.config))
            })
            .collect();
        let candidate_steps = candidates.len();

        state = self.advance(state);
        let (steps, duplicates_removed) = dedupe_steps(candidates);

        state = self.advance(state);
        tracing::info!(
            phases = detection.phases.len(),
            segments = segments.len(),
            steps = steps.len(),
            duplicates_removed,
            "parse complete"
        );

        let journey = Journey {
            id: JourneyId::generate(at),
            name: format!("{} Interview", request.user_name),
            user_name: request.user_name.clone(),
            region: request.region.clone(),
            genre_focus: request.genre_focus.clone(),
            upload_date: at,
            steps,
        };

        let report = ParseReport {
            phases: detection.phases,
            used_fallback: detection.used_fallback,
            segments: segments.len(),
            candidate_steps,
            duplicates_removed,
            state,
        };

        (journey, report)
    }

    fn advance(&self, state: ParseState) -> ParseState {
        let next = state.next();
        tracing::trace!(from = ?state, to = ?next, "pass transition");
        next
    }
}

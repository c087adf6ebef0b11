//! Pass 2: segment note lines by phase

use crate::journey::Phase;
use crate::keywords::{any_found_in, KeywordTables};
use std::collections::HashSet;

/// The note lines associated with one phase, plus surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseSegment {
    pub phase: Phase,
    /// Contributing raw lines, ascending source order
    pub lines: Vec<String>,
    /// Source line numbers (0-based, over non-blank lines) of `lines`
    pub line_indices: Vec<usize>,
    /// `lines` joined with a single space
    pub context: String,
}

impl PhaseSegment {
    /// Lower-cased `context`, the form every field extractor scans.
    pub fn normalized_context(&self) -> String {
        self.context.to_lowercase()
    }
}

/// Split notes into the non-blank lines the segmenter indexes.
pub fn note_lines(notes: &str) -> Vec<&str> {
    notes.lines().filter(|line| !line.trim().is_empty()).collect()
}

/// Build one segment per phase with at least one keyword hit.
///
/// A hit on line `i` pulls in lines `i - radius ..= i + radius`, clipped to
/// the text and skipping lines already taken for the same phase. Phases
/// whose keywords only matched across a line boundary produce no segment.
pub fn segment_by_phase(
    lines: &[&str],
    phases: &[Phase],
    tables: &KeywordTables,
    radius: usize,
) -> Vec<PhaseSegment> {
    let normalized: Vec<String> = lines.iter().map(|line| line.to_lowercase()).collect();
    let mut segments = Vec::new();

    for phase in phases {
        let Some(entry) = tables.phase(phase) else {
            continue;
        };

        let mut taken = HashSet::new();
        let mut line_indices = Vec::new();

        for (i, line) in normalized.iter().enumerate() {
            if !any_found_in(&entry.keywords, line) {
                continue;
            }
            let start = i.saturating_sub(radius);
            let end = i.saturating_add(radius).saturating_add(1).min(lines.len());
            for j in start..end {
                if taken.insert(j) {
                    line_indices.push(j);
                }
            }
        }

        if line_indices.is_empty() {
            continue;
        }

        let segment_lines: Vec<String> = line_indices.iter().map(|&j| lines[j].to_string()).collect();
        tracing::debug!(%phase, lines = segment_lines.len(), "segmented");

        segments.push(PhaseSegment {
            phase: phase.clone(),
            context: segment_lines.join(" "),
            lines: segment_lines,
            line_indices,
        });
    }

    segments
}

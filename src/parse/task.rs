//! Pass 3a: task extraction from segment lines

use super::segment::PhaseSegment;
use crate::keywords::KeywordTables;
use std::collections::HashSet;

/// Strip a leading bullet (`-`, `•`, `*`) and the whitespace after it.
fn strip_bullet(line: &str) -> &str {
    match line.strip_prefix(|c: char| matches!(c, '-' | '•' | '*')) {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

/// Strip a leading `N.` list number.
fn strip_number(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return line;
    }
    match rest.strip_prefix('.') {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

/// Strip a leading all-caps label such as `TASK:`.
fn strip_label(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_uppercase());
    if rest.len() == line.len() {
        return line;
    }
    match rest.strip_prefix(':') {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

/// Trim and strip bullet and number markers, keeping any label.
///
/// Pain point and opportunity text is reported in this form.
pub fn strip_list_markers(line: &str) -> &str {
    strip_number(strip_bullet(line.trim()))
}

/// Trim and strip bullet, number and label markers.
pub fn clean_line(line: &str) -> &str {
    strip_label(strip_list_markers(line)).trim()
}

/// Turn a segment's lines into distinct candidate tasks.
///
/// A cleaned line qualifies if it is longer than `min_len` characters and
/// is not just a phase name. Duplicates collapse onto their first sighting.
pub fn extract_tasks(segment: &PhaseSegment, tables: &KeywordTables, min_len: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tasks = Vec::new();

    for line in &segment.lines {
        let cleaned = clean_line(line);
        if cleaned.chars().count() <= min_len || tables.is_phase_name(cleaned) {
            continue;
        }
        if seen.insert(cleaned) {
            tasks.push(cleaned.to_string());
        }
    }

    tracing::debug!(phase = %segment.phase, tasks = tasks.len(), "tasks extracted");
    tasks
}

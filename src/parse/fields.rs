//! Pass 3b: per-step field extraction
//!
//! Seven independent extractors. Each scans the segment (lower-cased
//! context or raw lines) and yields at most one value; single-valued
//! fields take the first table entry that matches.

use super::segment::PhaseSegment;
use super::task::strip_list_markers;
use super::types::ParserConfig;
use crate::journey::{Emotion, Frequency, JourneyStep};
use crate::keywords::{any_found_in, Keyword, KeywordTables};
use regex_lite::Regex;
use std::sync::LazyLock;

static DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("double-quote pattern is valid"));
static SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']+)'").expect("single-quote pattern is valid"));

/// Upper-case the first character, leave the rest alone.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render a matched tool: short terms are treated as acronyms.
fn tool_display(keyword: &Keyword) -> String {
    let text = keyword.text().trim();
    if text.chars().count() <= 3 {
        text.to_uppercase()
    } else {
        capitalize(text)
    }
}

/// First tool (table order) named in the task or, failing that, its context.
pub fn extract_tool(task: &str, context: &str, tables: &KeywordTables) -> Option<String> {
    tables
        .tools
        .iter()
        .find(|tool| tool.found_in(task) || tool.found_in(context))
        .map(tool_display)
}

pub fn extract_emotion(context: &str, tables: &KeywordTables) -> Option<Emotion> {
    tables
        .emotions
        .iter()
        .find(|entry| any_found_in(&entry.keywords, context))
        .map(|entry| entry.emotion)
}

/// First segment line carrying any of the keywords, list markers stripped.
///
/// Nothing is returned unless the joined context also matches, so a
/// keyword split across lines yields no line.
fn first_matching_line(segment: &PhaseSegment, context: &str, keywords: &[Keyword]) -> Option<String> {
    if !any_found_in(keywords, context) {
        return None;
    }
    segment
        .lines
        .iter()
        .find(|line| any_found_in(keywords, &line.to_lowercase()))
        .map(|line| strip_list_markers(line).to_string())
}

pub fn extract_pain_point(segment: &PhaseSegment, context: &str, tables: &KeywordTables) -> Option<String> {
    first_matching_line(segment, context, &tables.pain_points)
}

pub fn extract_opportunity(segment: &PhaseSegment, context: &str, tables: &KeywordTables) -> Option<String> {
    first_matching_line(segment, context, &tables.opportunities)
}

/// First double-quoted span in the segment, else the first single-quoted one.
///
/// Unbalanced quotes simply don't match.
pub fn extract_quote(segment: &PhaseSegment) -> Option<String> {
    [&*DOUBLE_QUOTED, &*SINGLE_QUOTED].into_iter().find_map(|re| {
        segment
            .lines
            .iter()
            .find_map(|line| re.captures(line).map(|caps| caps[1].to_string()))
    })
}

/// Every collaborator role present, table order, joined with ", ".
pub fn extract_collaborators(context: &str, tables: &KeywordTables) -> Option<String> {
    let mut found: Vec<String> = Vec::new();
    for role in tables.collaborators.iter().filter(|k| k.found_in(context)) {
        let name = capitalize(role.text().trim());
        if !found.contains(&name) {
            found.push(name);
        }
    }
    (!found.is_empty()).then(|| found.join(", "))
}

pub fn extract_frequency(context: &str, tables: &KeywordTables) -> Option<Frequency> {
    tables
        .frequencies
        .iter()
        .find(|entry| any_found_in(&entry.keywords, context))
        .map(|entry| entry.frequency)
}

/// Assemble one step for a task. `None` only for a blank task.
pub fn build_step(
    segment: &PhaseSegment,
    task: &str,
    tables: &KeywordTables,
    config: &ParserConfig,
) -> Option<JourneyStep> {
    if task.trim().is_empty() {
        return None;
    }

    let context = segment.normalized_context();
    let task_lower = task.to_lowercase();

    let tool = extract_tool(&task_lower, &context, tables)
        .unwrap_or_else(|| config.tool_placeholder.clone());

    Some(JourneyStep {
        overall_action: segment.phase.clone(),
        task: task.to_string(),
        tool_used: tool,
        steps: None,
        emotion: extract_emotion(&context, tables),
        pain_point: extract_pain_point(segment, &context, tables),
        opportunity: extract_opportunity(segment, &context, tables),
        key_quote: extract_quote(segment),
        collaborators: extract_collaborators(&context, tables),
        frequency: extract_frequency(&context, tables),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journey::{Phase, TOOL_NOT_SPECIFIED};

    fn segment(lines: &[&str]) -> PhaseSegment {
        let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        PhaseSegment {
            phase: Phase::from("Pitching"),
            line_indices: (0..lines.len()).collect(),
            context: lines.join(" "),
            lines,
        }
    }

    // === Tool ===

    #[test]
    fn tool_follows_table_order() {
        let tables = KeywordTables::default();
        // "email" precedes "phone" in the table
        assert_eq!(
            extract_tool("call by phone then email", "", &tables).as_deref(),
            Some("Email")
        );
    }

    #[test]
    fn tool_found_in_context_when_task_has_none() {
        let tables = KeywordTables::default();
        assert_eq!(
            extract_tool("send the demo", "we keep it all in dropbox", &tables).as_deref(),
            Some("Dropbox")
        );
    }

    #[test]
    fn earlier_table_tool_in_context_beats_later_tool_in_task() {
        let tables = KeywordTables::default();
        // "Arrow" precedes "email"; each tool checks task then context
        assert_eq!(
            extract_tool("send the pitch by email", "demos live in arrow", &tables).as_deref(),
            Some("Arrow")
        );
    }

    #[test]
    fn short_tools_render_as_acronyms() {
        let tables = KeywordTables::default();
        assert_eq!(extract_tool("log it in wcm", "", &tables).as_deref(), Some("WCM"));
        assert_eq!(extract_tool("check the crm", "", &tables).as_deref(), Some("CRM"));
        assert_eq!(extract_tool("use the app", "", &tables).as_deref(), Some("APP"));
        assert_eq!(
            extract_tool("open google drive", "", &tables).as_deref(),
            Some("Google Drive")
        );
    }

    #[test]
    fn no_tool_is_none() {
        let tables = KeywordTables::default();
        assert_eq!(extract_tool("upload demo files.", "upload demo files.", &tables), None);
    }

    // === Emotion ===

    #[test]
    fn first_emotion_in_table_order_wins() {
        let tables = KeywordTables::default();
        // "easy" is Confident, "annoying" is Frustrated; Frustrated is declared first
        assert_eq!(
            extract_emotion("easy but annoying", &tables),
            Some(Emotion::Frustrated)
        );
        assert_eq!(extract_emotion("nothing to report", &tables), None);
    }

    // === Pain point / opportunity ===

    #[test]
    fn pain_point_is_first_matching_line_cleaned() {
        let tables = KeywordTables::default();
        let seg = segment(&["- Send the pitch out", "- 2. Pain Point: hard to find uploads."]);
        let ctx = seg.normalized_context();
        assert_eq!(
            extract_pain_point(&seg, &ctx, &tables).as_deref(),
            Some("Pain Point: hard to find uploads.")
        );
    }

    #[test]
    fn opportunity_is_first_matching_line() {
        let tables = KeywordTables::default();
        let seg = segment(&["Pitch via email", "* It would be nice to batch pitches"]);
        let ctx = seg.normalized_context();
        assert_eq!(
            extract_opportunity(&seg, &ctx, &tables).as_deref(),
            Some("It would be nice to batch pitches")
        );
    }

    #[test]
    fn pain_point_absent_without_keyword() {
        let tables = KeywordTables::default();
        let seg = segment(&["Pitch via email"]);
        let ctx = seg.normalized_context();
        assert_eq!(extract_pain_point(&seg, &ctx, &tables), None);
    }

    // === Quote ===

    #[test]
    fn double_quote_beats_single_quote_on_same_line() {
        let seg = segment(&[r#"She said 'meh' and then "this is too slow" loudly"#]);
        assert_eq!(extract_quote(&seg).as_deref(), Some("this is too slow"));
    }

    #[test]
    fn double_quote_on_later_line_beats_earlier_single_quote() {
        let seg = segment(&["the 'share' button", r#""Pitching takes forever""#]);
        assert_eq!(extract_quote(&seg).as_deref(), Some("Pitching takes forever"));
    }

    #[test]
    fn single_quote_used_when_no_double() {
        let seg = segment(&["click the 'share' button"]);
        assert_eq!(extract_quote(&seg).as_deref(), Some("share"));
    }

    #[test]
    fn unbalanced_quotes_yield_nothing() {
        let seg = segment(&[r#"she said "this never ends"#]);
        assert_eq!(extract_quote(&seg), None);
    }

    // === Collaborators ===

    #[test]
    fn collects_all_collaborators_in_table_order() {
        let tables = KeywordTables::default();
        assert_eq!(
            extract_collaborators("with writers and producers", &tables).as_deref(),
            Some("Producer, Writer")
        );
    }

    #[test]
    fn acronym_collaborator_keeps_case() {
        let tables = KeywordTables::default();
        assert_eq!(
            extract_collaborators("the a&r lead", &tables).as_deref(),
            Some("A&R")
        );
        assert_eq!(extract_collaborators("alone", &tables), None);
    }

    // === Frequency ===

    #[test]
    fn frequency_first_match_wins() {
        let tables = KeywordTables::default();
        assert_eq!(
            extract_frequency("weekly sync, daily checks", &tables),
            Some(Frequency::Daily)
        );
        assert_eq!(
            extract_frequency("once per song", &tables),
            Some(Frequency::PerPitch)
        );
        assert_eq!(extract_frequency("whenever", &tables), None);
    }

    // === Step assembly ===

    #[test]
    fn build_step_defaults_tool_placeholder() {
        let tables = KeywordTables::default();
        let seg = segment(&["Upload demo files."]);
        let step = build_step(&seg, "Upload demo files.", &tables, &ParserConfig::default()).unwrap();
        assert_eq!(step.tool_used, TOOL_NOT_SPECIFIED);
        assert_eq!(step.overall_action.as_str(), "Pitching");
        assert!(step.steps.is_none());
    }

    #[test]
    fn build_step_rejects_blank_task() {
        let tables = KeywordTables::default();
        let seg = segment(&["anything"]);
        assert!(build_step(&seg, "   ", &tables, &ParserConfig::default()).is_none());
    }
}

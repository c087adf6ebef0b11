//! Parse summary statistics for a journey

use super::record::Journey;
use super::step::Emotion;
use serde::Serialize;
use std::collections::HashSet;

/// Counts a presentation layer shows next to a parsed journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneySummary {
    pub unique_phases: usize,
    pub total_tasks: usize,
    pub pain_points: usize,
    pub opportunities: usize,
    pub quotes: usize,
    /// Distinct `tool_used` values, the placeholder included
    pub tools: usize,
    /// Emotion counts in first-seen order
    pub emotions: Vec<(Emotion, usize)>,
}

impl JourneySummary {
    pub fn from_journey(journey: &Journey) -> Self {
        let steps = &journey.steps;

        let unique_phases: HashSet<&str> =
            steps.iter().map(|s| s.overall_action.as_str()).collect();
        let tools: HashSet<&str> = steps.iter().map(|s| s.tool_used.as_str()).collect();

        let mut emotions: Vec<(Emotion, usize)> = Vec::new();
        for emotion in steps.iter().filter_map(|s| s.emotion) {
            match emotions.iter_mut().find(|(e, _)| *e == emotion) {
                Some((_, count)) => *count += 1,
                None => emotions.push((emotion, 1)),
            }
        }

        Self {
            unique_phases: unique_phases.len(),
            total_tasks: steps.len(),
            pain_points: steps.iter().filter(|s| s.pain_point.is_some()).count(),
            opportunities: steps.iter().filter(|s| s.opportunity.is_some()).count(),
            quotes: steps.iter().filter(|s| s.key_quote.is_some()).count(),
            tools: tools.len(),
            emotions,
        }
    }
}

impl std::fmt::Display for JourneySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:<16} {:>5}", "Unique phases", self.unique_phases)?;
        writeln!(f, "{:<16} {:>5}", "Total tasks", self.total_tasks)?;
        writeln!(f, "{:<16} {:>5}", "Pain points", self.pain_points)?;
        writeln!(f, "{:<16} {:>5}", "Opportunities", self.opportunities)?;
        writeln!(f, "{:<16} {:>5}", "Quotes", self.quotes)?;
        write!(f, "{:<16} {:>5}", "Tools used", self.tools)?;
        for (emotion, count) in &self.emotions {
            write!(f, "\n  {:<14} {:>5}", emotion.as_str(), count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journey::{JourneyId, JourneyStep};
    use chrono::Utc;

    #[test]
    fn counts_fields_across_steps() {
        let steps = vec![
            JourneyStep::new("Song Intake".into(), "Receive demo from the writer", "Email")
                .with_pain_point("Hard to find the attachment")
                .with_emotion(Emotion::Frustrated),
            JourneyStep::new("Song Intake".into(), "Upload the demo into Arrow", "Arrow")
                .with_emotion(Emotion::Frustrated)
                .with_key_quote("It takes forever"),
            JourneyStep::new("Pitching".into(), "Send pitch to the artist manager", "Email")
                .with_opportunity("Would be nice to pitch in bulk")
                .with_emotion(Emotion::Confident),
        ];
        let now = Utc::now();
        let journey = Journey {
            id: JourneyId::generate(now),
            name: "Sam Interview".into(),
            user_name: "Sam".into(),
            region: "London".into(),
            genre_focus: "Pop".into(),
            upload_date: now,
            steps,
        };

        let summary = JourneySummary::from_journey(&journey);
        assert_eq!(summary.unique_phases, 2);
        assert_eq!(summary.total_tasks, 3);
        assert_eq!(summary.pain_points, 1);
        assert_eq!(summary.opportunities, 1);
        assert_eq!(summary.quotes, 1);
        assert_eq!(summary.tools, 2);
        assert_eq!(
            summary.emotions,
            vec![(Emotion::Frustrated, 2), (Emotion::Confident, 1)]
        );
    }
}

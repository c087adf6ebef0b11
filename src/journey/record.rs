//! The aggregate journey produced by one parse call

use super::step::{JourneyStep, Phase};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a parsed journey
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JourneyId(String);

impl JourneyId {
    /// Build an id from the parse timestamp plus a random suffix.
    ///
    /// Format: `interview-<unix millis>-<8 hex chars>`. The suffix keeps ids
    /// unique when two parses land in the same millisecond.
    pub fn generate(at: DateTime<Utc>) -> Self {
        let token = Uuid::new_v4().simple().to_string();
        Self(format!("interview-{}-{}", at.timestamp_millis(), &token[..8]))
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JourneyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The full ordered collection of steps for one interview, plus the
/// metadata submitted alongside the notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    pub id: JourneyId,
    pub name: String,
    pub user_name: String,
    pub region: String,
    pub genre_focus: String,
    pub upload_date: DateTime<Utc>,
    pub steps: Vec<JourneyStep>,
}

impl Journey {
    /// Group steps by phase, phases in order of first appearance.
    pub fn steps_by_phase(&self) -> Vec<(Phase, Vec<&JourneyStep>)> {
        let mut groups: Vec<(Phase, Vec<&JourneyStep>)> = Vec::new();
        for step in &self.steps {
            match groups.iter_mut().find(|(p, _)| *p == step.overall_action) {
                Some((_, members)) => members.push(step),
                None => groups.push((step.overall_action.clone(), vec![step])),
            }
        }
        groups
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

//! Journey step representation

use serde::{Deserialize, Serialize};

/// A named workflow stage ("Overall Action") used to group steps.
///
/// Phases are open tags: the keyword tables decide which values exist, so
/// this is a string newtype rather than a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phase(String);

impl Phase {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Phase {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Phase {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Emotional tone attached to a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Confident,
    Frustrated,
    Anxious,
    Satisfied,
    Efficient,
    /// Only set by manual edits; the parser never infers it
    Neutral,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confident => "Confident",
            Self::Frustrated => "Frustrated",
            Self::Anxious => "Anxious",
            Self::Satisfied => "Satisfied",
            Self::Efficient => "Efficient",
            Self::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a step happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    #[serde(rename = "Per-pitch")]
    PerPitch,
    Occasional,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::PerPitch => "Per-pitch",
            Self::Occasional => "Occasional",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted task plus its optional attributes, scoped to one phase.
///
/// `(overall_action, task.to_lowercase())` is the deduplication key.
/// Every attribute other than `tool_used` is independently optional and
/// omitted from the serialized form when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStep {
    pub overall_action: Phase,
    pub task: String,
    pub tool_used: String,
    /// Free-text elaboration, only ever written by manual edits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collaborators: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
}

impl JourneyStep {
    pub fn new(phase: Phase, task: impl Into<String>, tool_used: impl Into<String>) -> Self {
        Self {
            overall_action: phase,
            task: task.into(),
            tool_used: tool_used.into(),
            steps: None,
            emotion: None,
            pain_point: None,
            opportunity: None,
            key_quote: None,
            collaborators: None,
            frequency: None,
        }
    }

    pub fn with_steps(mut self, steps: impl Into<String>) -> Self {
        self.steps = Some(steps.into());
        self
    }

    pub fn with_emotion(mut self, emotion: Emotion) -> Self {
        self.emotion = Some(emotion);
        self
    }

    pub fn with_pain_point(mut self, pain_point: impl Into<String>) -> Self {
        self.pain_point = Some(pain_point.into());
        self
    }

    pub fn with_opportunity(mut self, opportunity: impl Into<String>) -> Self {
        self.opportunity = Some(opportunity.into());
        self
    }

    pub fn with_key_quote(mut self, quote: impl Into<String>) -> Self {
        self.key_quote = Some(quote.into());
        self
    }

    pub fn with_collaborators(mut self, collaborators: impl Into<String>) -> Self {
        self.collaborators = Some(collaborators.into());
        self
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// The `(phase, lowercased task)` pair no two steps of a journey may share.
    pub fn dedup_key(&self) -> (String, String) {
        (
            self.overall_action.as_str().to_string(),
            self.task.to_lowercase(),
        )
    }
}

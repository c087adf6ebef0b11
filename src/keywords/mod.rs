//! Ordered keyword tables that drive every heuristic pass
//!
//! Tables are explicit ordered sequences, never maps: single-valued fields
//! take the first matching entry, so declaration order is the priority
//! rule. The built-in tables come from [`KeywordTables::default`]; a YAML
//! document can replace any section (see [`KeywordTables::from_yaml`]).

mod defaults;

use crate::journey::{Emotion, Frequency, Phase};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating keyword tables
#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("failed to read keyword tables from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid keyword YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid keyword tables: {0}")]
    Invalid(String),
}

/// A keyword with its display form and its lower-cased match form.
///
/// Matching is always against lower-cased text, so the match form is
/// computed once here. The display form is what tool and collaborator
/// extraction render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Keyword {
    text: String,
    needle: String,
}

impl Keyword {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Substring test against already lower-cased text.
    pub fn found_in(&self, lower: &str) -> bool {
        !self.needle.is_empty() && lower.contains(&self.needle)
    }
}

impl From<String> for Keyword {
    fn from(text: String) -> Self {
        let needle = text.trim().to_lowercase();
        Self { text, needle }
    }
}

impl From<&str> for Keyword {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

impl From<Keyword> for String {
    fn from(k: Keyword) -> Self {
        k.text
    }
}

/// True if any keyword occurs in the lower-cased text.
pub fn any_found_in(keywords: &[Keyword], lower: &str) -> bool {
    keywords.iter().any(|k| k.found_in(lower))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseKeywords {
    pub phase: Phase,
    pub keywords: Vec<Keyword>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionKeywords {
    pub emotion: Emotion,
    pub keywords: Vec<Keyword>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyKeywords {
    pub frequency: Frequency,
    pub keywords: Vec<Keyword>,
}

/// Every keyword table the parser consults.
///
/// Sections omitted from a YAML document keep their built-in value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTables {
    pub phases: Vec<PhaseKeywords>,
    pub default_phases: Vec<Phase>,
    pub tools: Vec<Keyword>,
    pub emotions: Vec<EmotionKeywords>,
    pub pain_points: Vec<Keyword>,
    pub opportunities: Vec<Keyword>,
    pub collaborators: Vec<Keyword>,
    pub frequencies: Vec<FrequencyKeywords>,
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self {
            phases: defaults::phases(),
            default_phases: defaults::default_phases(),
            tools: defaults::tools(),
            emotions: defaults::emotions(),
            pain_points: defaults::pain_points(),
            opportunities: defaults::opportunities(),
            collaborators: defaults::collaborators(),
            frequencies: defaults::frequencies(),
        }
    }
}

impl KeywordTables {
    /// Parse and validate tables from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, KeywordError> {
        let tables: Self = serde_yaml::from_str(yaml)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Read, parse and validate tables from a YAML file.
    pub fn from_path(path: &Path) -> Result<Self, KeywordError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| KeywordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Resolve the active tables: an explicit path wins, then the user
    /// config file if it exists, then the built-in tables.
    pub fn load(explicit: Option<&Path>) -> Result<Self, KeywordError> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading keyword tables");
            return Self::from_path(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading keyword tables from config dir");
                Self::from_path(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn to_yaml(&self) -> Result<String, KeywordError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the invariants the parser relies on.
    pub fn validate(&self) -> Result<(), KeywordError> {
        if self.phases.is_empty() {
            return Err(KeywordError::Invalid("no phases defined".into()));
        }

        let mut seen = HashSet::new();
        for entry in &self.phases {
            let name = entry.phase.as_str().trim();
            if name.is_empty() {
                return Err(KeywordError::Invalid("phase with blank name".into()));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(KeywordError::Invalid(format!("duplicate phase '{}'", name)));
            }
            if entry.keywords.iter().all(|k| k.needle().is_empty()) {
                return Err(KeywordError::Invalid(format!(
                    "phase '{}' has no keywords",
                    name
                )));
            }
        }

        if self.default_phases.is_empty() {
            return Err(KeywordError::Invalid("no default phases defined".into()));
        }
        for phase in &self.default_phases {
            if self.phase(phase).is_none() {
                return Err(KeywordError::Invalid(format!(
                    "default phase '{}' is not in the phase table",
                    phase
                )));
            }
        }

        Ok(())
    }

    /// Look up a phase's table entry.
    pub fn phase(&self, phase: &Phase) -> Option<&PhaseKeywords> {
        self.phases.iter().find(|p| &p.phase == phase)
    }

    /// True if the text is, case-insensitively, just a phase name.
    pub fn is_phase_name(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.phases
            .iter()
            .any(|p| p.phase.as_str().to_lowercase() == lower)
    }
}

/// `<config dir>/journeymap/keywords.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("journeymap").join("keywords.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_valid() {
        let tables = KeywordTables::default();
        tables.validate().unwrap();
        assert_eq!(tables.phases.len(), 14);
        assert_eq!(tables.phases[0].phase.as_str(), "Song Intake");
        assert_eq!(tables.phases[13].phase.as_str(), "Proposed Solutions");
        assert_eq!(tables.default_phases.len(), 5);
    }

    #[test]
    fn keyword_match_form_is_lowercase() {
        let k = Keyword::from("A&R");
        assert_eq!(k.text(), "A&R");
        assert_eq!(k.needle(), "a&r");
        assert!(k.found_in("talked to the a&r team"));
        assert!(!Keyword::from("  ").found_in("anything"));
    }

    #[test]
    fn is_phase_name_ignores_case() {
        let tables = KeywordTables::default();
        assert!(tables.is_phase_name("song intake"));
        assert!(tables.is_phase_name("SEARCH & DISCOVERY"));
        assert!(!tables.is_phase_name("song intake today"));
    }

    #[test]
    fn yaml_overrides_only_given_sections() {
        let yaml = r#"
phases:
  - phase: Sync Licensing
    keywords: [sync, licensing brief]
default_phases: [Sync Licensing]
tools: [Disco, Arrow]
"#;
        let tables = KeywordTables::from_yaml(yaml).unwrap();
        assert_eq!(tables.phases.len(), 1);
        assert_eq!(tables.phases[0].keywords[1].needle(), "licensing brief");
        assert_eq!(tables.tools.len(), 2);
        assert_eq!(tables.emotions, KeywordTables::default().emotions);
    }

    #[test]
    fn yaml_round_trips_through_display_form() {
        let tables = KeywordTables::default();
        let yaml = tables.to_yaml().unwrap();
        assert!(yaml.contains("A&R"));
        assert_eq!(KeywordTables::from_yaml(&yaml).unwrap(), tables);
    }

    #[test]
    fn rejects_default_phase_missing_from_table() {
        let yaml = r#"
phases:
  - phase: Sync Licensing
    keywords: [sync]
default_phases: [Song Intake]
"#;
        let err = KeywordTables::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, KeywordError::Invalid(msg) if msg.contains("Song Intake")));
    }

    #[test]
    fn rejects_duplicate_phase() {
        let yaml = r#"
phases:
  - phase: Pitching
    keywords: [pitch]
  - phase: pitching
    keywords: [send to]
default_phases: [Pitching]
"#;
        assert!(matches!(
            KeywordTables::from_yaml(yaml),
            Err(KeywordError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_phase_without_keywords() {
        let yaml = r#"
phases:
  - phase: Pitching
    keywords: []
default_phases: [Pitching]
"#;
        assert!(matches!(
            KeywordTables::from_yaml(yaml),
            Err(KeywordError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        assert!(matches!(
            KeywordTables::from_yaml("phases: [unclosed"),
            Err(KeywordError::Yaml(_))
        ));
    }
}

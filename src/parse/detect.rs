//! Pass 1: phase detection

use crate::journey::Phase;
use crate::keywords::{any_found_in, KeywordTables};

/// Phases found in a note, in phase-table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseDetection {
    pub phases: Vec<Phase>,
    /// Nothing matched; `phases` is the default list
    pub used_fallback: bool,
}

/// Find every phase whose keywords occur anywhere in the lower-cased notes.
///
/// Output follows table order, not discovery order. An empty result is
/// replaced by the table's default phases so later passes always have
/// something to segment against.
pub fn detect_phases(normalized: &str, tables: &KeywordTables) -> PhaseDetection {
    let phases: Vec<Phase> = tables
        .phases
        .iter()
        .filter(|entry| any_found_in(&entry.keywords, normalized))
        .map(|entry| entry.phase.clone())
        .collect();

    if phases.is_empty() {
        tracing::warn!("no phase keywords found, using default workflow");
        return PhaseDetection {
            phases: tables.default_phases.clone(),
            used_fallback: true,
        };
    }

    for phase in &phases {
        tracing::debug!(%phase, "phase detected");
    }

    PhaseDetection {
        phases,
        used_fallback: false,
    }
}

//! Pass 4: drop duplicate steps

use crate::journey::JourneyStep;
use std::collections::HashSet;

/// Keep the first step for each `(phase, lowercased task)` key.
///
/// Returns the surviving steps in their original order and how many were
/// removed.
pub fn dedupe_steps(steps: Vec<JourneyStep>) -> (Vec<JourneyStep>, usize) {
    let total = steps.len();
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(total);

    for step in steps {
        if seen.insert(step.dedup_key()) {
            unique.push(step);
        } else {
            tracing::debug!(phase = %step.overall_action, task = %step.task, "removed duplicate");
        }
    }

    let removed = total - unique.len();
    tracing::debug!(removed, "deduplication complete");
    (unique, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journey::Phase;

    fn step(phase: &str, task: &str) -> JourneyStep {
        JourneyStep::new(Phase::from(phase), task, "Not specified")
    }

    #[test]
    fn removes_case_insensitive_duplicates_within_phase() {
        let (steps, removed) = dedupe_steps(vec![
            step("Pitching", "Send pitch to manager"),
            step("Pitching", "SEND PITCH TO MANAGER"),
            step("Pitching", "Follow up by phone call"),
        ]);
        assert_eq!(removed, 1);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].task, "Send pitch to manager");
        assert_eq!(steps[1].task, "Follow up by phone call");
    }

    #[test]
    fn same_task_in_different_phases_is_kept() {
        let (steps, removed) = dedupe_steps(vec![
            step("Pitching", "Send pitch to manager"),
            step("Demo Pitching", "Send pitch to manager"),
        ]);
        assert_eq!(removed, 0);
        assert_eq!(steps.len(), 2);
    }

    #[test]
    fn empty_input() {
        let (steps, removed) = dedupe_steps(Vec::new());
        assert!(steps.is_empty());
        assert_eq!(removed, 0);
    }
}

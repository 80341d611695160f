//! Qubits panel state: selection set and per-card question counters

use std::collections::{BTreeMap, HashSet};

use portal_core::QubitsModule;

/// Counter lower bound.
pub const MIN_QUESTIONS: u8 = 1;
/// Counter upper bound. Fixed constant, deliberately independent of a
/// module's actual `total_questions` (preserved inconsistency from the
/// product: a module with fewer than 9 questions can still be pushed
/// toward 10).
pub const MAX_QUESTIONS: u8 = 10;
/// Fallback when a module id has no seeded counter.
pub const DEFAULT_QUESTIONS: u8 = 9;

/// UI-local state for the Qubits self-test panel.
///
/// Selection and counters are keyed by module id. The counter map is a
/// `BTreeMap` for explicit key uniqueness; rendering order always comes
/// from the authoritative module sequence, never from map iteration.
#[derive(Debug, Clone, Default)]
pub struct QubitsState {
    /// Ids of currently selected module cards
    pub selected: HashSet<String>,

    /// Chosen "questions to attempt" per module id
    pub counts: BTreeMap<String, u8>,
}

impl QubitsState {
    /// Seed selection and counters from the snapshot's module cards.
    pub fn seeded(modules: &[QubitsModule]) -> Self {
        Self {
            selected: modules
                .iter()
                .filter(|m| m.is_selected)
                .map(|m| m.id.clone())
                .collect(),
            counts: modules
                .iter()
                .map(|m| (m.id.clone(), m.questions_to_attempt))
                .collect(),
        }
    }

    /// Flip selection membership for a module id.
    pub fn toggle_selection(&mut self, module_id: &str) {
        if !self.selected.remove(module_id) {
            self.selected.insert(module_id.to_string());
        }
    }

    /// Select-all toggle: when every module is already selected this
    /// clears the set, otherwise it selects every module id.
    pub fn select_all(&mut self, modules: &[QubitsModule]) {
        let all_selected =
            !modules.is_empty() && modules.iter().all(|m| self.selected.contains(&m.id));
        if all_selected {
            self.selected.clear();
        } else {
            self.selected = modules.iter().map(|m| m.id.clone()).collect();
        }
    }

    pub fn is_selected(&self, module_id: &str) -> bool {
        self.selected.contains(module_id)
    }

    /// Current counter for a module id, falling back to the default.
    pub fn count_for(&self, module_id: &str) -> u8 {
        self.counts
            .get(module_id)
            .copied()
            .unwrap_or(DEFAULT_QUESTIONS)
    }

    /// Adjust the counter by `delta`, clamped to the fixed bounds.
    /// Out-of-range results clamp; no error is ever raised. The sum is
    /// computed in `i32` so no `delta` value can overflow.
    pub fn adjust_count(&mut self, module_id: &str, delta: i16) {
        let current = i32::from(self.count_for(module_id));
        let new = (current + i32::from(delta))
            .clamp(i32::from(MIN_QUESTIONS), i32::from(MAX_QUESTIONS));
        self.counts.insert(module_id.to_string(), new as u8);
    }
}

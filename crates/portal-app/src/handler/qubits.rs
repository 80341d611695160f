//! Qubits panel handlers: selection, counters, and test/reset/acclaim
//! intents

use portal_core::prelude::*;

use crate::state::DashboardState;

use super::{UpdateAction, UpdateResult};

/// Flip a module card's selection checkbox.
pub fn handle_toggle_selection(state: &mut DashboardState, module_id: &str) -> UpdateResult {
    if !known_module(state, module_id) {
        warn!(module_id, "Ignoring selection toggle for unknown Qubits module");
        return UpdateResult::none();
    }
    state.qubits.toggle_selection(module_id);
    UpdateResult::none()
}

/// Select-all toggle over the module cards.
pub fn handle_select_all(state: &mut DashboardState) -> UpdateResult {
    // select_all borrows the snapshot's card list while mutating the
    // panel state, so the list is cloned out first.
    let modules = state.snapshot.qubits_modules.clone();
    state.qubits.select_all(&modules);
    UpdateResult::none()
}

/// Step a card's "questions to attempt" counter, clamped to bounds.
pub fn handle_adjust_count(
    state: &mut DashboardState,
    module_id: &str,
    delta: i16,
) -> UpdateResult {
    if !known_module(state, module_id) {
        warn!(module_id, "Ignoring counter adjust for unknown Qubits module");
        return UpdateResult::none();
    }
    state.qubits.adjust_count(module_id, delta);
    UpdateResult::none()
}

/// Begin a self-test with the currently chosen question count.
pub fn handle_start_test(state: &mut DashboardState, module_id: &str) -> UpdateResult {
    if !known_module(state, module_id) {
        warn!(module_id, "Ignoring test start for unknown Qubits module");
        return UpdateResult::none();
    }
    let question_count = state.qubits.count_for(module_id);
    UpdateResult::action(UpdateAction::StartTest {
        module_id: module_id.to_string(),
        question_count,
    })
}

/// Reset all Qubits progress (fire-and-forget to the collaborator).
pub fn handle_reset(_state: &mut DashboardState) -> UpdateResult {
    UpdateResult::action(UpdateAction::ResetAllQubits)
}

/// Request the acclaim/certificate share flow (fire-and-forget).
pub fn handle_request_acclaim(_state: &mut DashboardState) -> UpdateResult {
    UpdateResult::action(UpdateAction::RequestAcclaim)
}

fn known_module(state: &DashboardState, module_id: &str) -> bool {
    state
        .snapshot
        .qubits_modules
        .iter()
        .any(|m| m.id == module_id)
}

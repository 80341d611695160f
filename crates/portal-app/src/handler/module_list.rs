//! Module list handlers: expand/collapse and the reveal window

use portal_core::prelude::*;

use crate::state::DashboardState;

use super::UpdateResult;

/// Flip the expanded state of a module.
///
/// Locked modules reject the toggle at the boundary; the expanded set
/// is left untouched. Unknown ids are logged no-ops.
pub fn handle_toggle_module(state: &mut DashboardState, module_id: &str) -> UpdateResult {
    let Some(module) = state.course().find_module(module_id) else {
        warn!(module_id, "Ignoring toggle for unknown module");
        return UpdateResult::none();
    };
    let module = module.clone();
    if !state.module_list.toggle(&module) {
        debug!(module_id, "Toggle rejected for locked module");
    }
    UpdateResult::none()
}

/// Grow the visible module window by the configured increment.
pub fn handle_show_more(state: &mut DashboardState) -> UpdateResult {
    state.module_list.show_more();
    UpdateResult::none()
}

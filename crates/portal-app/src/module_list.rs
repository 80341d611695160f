//! Module list state: expand/collapse set and incremental reveal window

use std::collections::HashSet;

use portal_core::Module;

/// UI-local state for the course module list.
///
/// The expanded set is keyed by module id. Locking is enforced at the
/// toggle boundary, not by hiding the control: a toggle on a locked
/// module is rejected with no state change.
#[derive(Debug, Clone)]
pub struct ModuleListState {
    /// Ids of currently expanded modules
    pub expanded: HashSet<String>,

    /// Size of the visible window over the module sequence.
    /// This is incremental reveal, not pagination: the full sequence is
    /// always resident, only the rendered prefix grows.
    pub visible: usize,

    /// How many more modules each "show more" reveals
    increment: usize,
}

impl ModuleListState {
    pub fn new(initial_expanded: &[String], initial_visible: usize, increment: usize) -> Self {
        Self {
            expanded: initial_expanded.iter().cloned().collect(),
            visible: initial_visible,
            increment,
        }
    }

    /// Flip the expanded state of a module.
    ///
    /// Returns `false` without any state change when the module is
    /// locked.
    pub fn toggle(&mut self, module: &Module) -> bool {
        if module.is_locked {
            return false;
        }
        if !self.expanded.remove(&module.id) {
            self.expanded.insert(module.id.clone());
        }
        true
    }

    pub fn is_expanded(&self, module_id: &str) -> bool {
        self.expanded.contains(module_id)
    }

    /// Grow the visible window by the configured increment.
    pub fn show_more(&mut self) {
        self.visible += self.increment;
    }

    /// Modules hidden beyond the current window. The "show more"
    /// affordance disappears once this reaches 0.
    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.visible)
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.remaining(total) > 0
    }

    /// The currently revealed prefix of the module sequence.
    pub fn visible_slice<'a>(&self, modules: &'a [Module]) -> &'a [Module] {
        &modules[..self.visible.min(modules.len())]
    }
}

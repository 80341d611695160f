//! Dashboard state (Model in TEA pattern)

use portal_core::{
    recompute_progress, recompute_qubits_progress, Course, PortalSnapshot, QubitsProgress,
    StudentProgress,
};

use crate::config::Settings;
use crate::modal::ModalState;
use crate::module_list::ModuleListState;
use crate::qubits::QubitsState;
use crate::tabs::Tab;
use crate::trainer::TrainerDraft;

/// Complete dashboard state (the Model in TEA).
///
/// The snapshot is an explicit constructor dependency, never ambient
/// process state, so tests can substitute fixtures. The shell and its
/// children never write back into it; the only mutable state is the
/// UI-local state owned here.
#[derive(Debug)]
pub struct DashboardState {
    /// Immutable session snapshot from the data-provisioning collaborator
    pub snapshot: PortalSnapshot,

    /// Dashboard layout settings from config file
    pub settings: Settings,

    /// Currently active content panel
    pub active_tab: Tab,

    /// Video/quiz overlay slots
    pub modal: ModalState,

    /// Module list expand/collapse + reveal window
    pub module_list: ModuleListState,

    /// Qubits panel selection + counters
    pub qubits: QubitsState,

    /// Trainer tab draft form
    pub trainer_draft: TrainerDraft,

    /// Derived progress aggregate, recomputed from the course tree
    pub progress: StudentProgress,

    /// Derived Qubits aggregate, recomputed from the module cards
    pub qubits_progress: QubitsProgress,
}

impl DashboardState {
    /// Create dashboard state from a validated snapshot and settings.
    pub fn new(snapshot: PortalSnapshot, settings: Settings) -> Self {
        let progress = recompute_progress(&snapshot.course, &snapshot.course.progress);
        let qubits_progress = recompute_qubits_progress(&snapshot.qubits_modules);
        let module_list = ModuleListState::new(
            &settings.ui.initial_expanded,
            settings.ui.initial_visible_modules,
            settings.ui.show_more_increment,
        );
        let qubits = QubitsState::seeded(&snapshot.qubits_modules);
        let active_tab = settings.ui.default_tab;

        Self {
            snapshot,
            settings,
            active_tab,
            modal: ModalState::new(),
            module_list,
            qubits,
            trainer_draft: TrainerDraft::default(),
            progress,
            qubits_progress,
        }
    }

    pub fn course(&self) -> &Course {
        &self.snapshot.course
    }

    /// Switch the active content panel.
    ///
    /// The deselected panel is destroyed, not suspended, so its local
    /// state resets here: leaving Qubits reseeds selection/counters
    /// from the snapshot, leaving Trainer clears the draft form.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        match self.active_tab {
            Tab::Qubits => {
                self.qubits = QubitsState::seeded(&self.snapshot.qubits_modules);
            }
            Tab::Trainer => {
                self.trainer_draft.clear();
            }
            _ => {}
        }
        self.active_tab = tab;
    }

    /// Recompute the derived aggregates from the snapshot tree.
    ///
    /// Called after every mutating event so the displayed stats can
    /// never drift from the module/quiz state they summarize.
    pub fn refresh_aggregates(&mut self) {
        self.progress = recompute_progress(&self.snapshot.course, &self.snapshot.course.progress);
        self.qubits_progress = recompute_qubits_progress(&self.snapshot.qubits_modules);
    }
}

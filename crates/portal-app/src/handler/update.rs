//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in the per-area submodules:
//! - `modal`: video/quiz overlay handlers
//! - `module_list`: expand/collapse and reveal-window handlers
//! - `qubits`: Qubits panel handlers
//! - `trainer`: trainer draft handlers

use crate::message::Message;
use crate::state::DashboardState;

use super::{modal, module_list, qubits, trainer, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut DashboardState, message: Message) -> UpdateResult {
    match message {
        // ─────────────────────────────────────────────────────────
        // Tab Router
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => {
            state.select_tab(tab);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Modal Controller
        // ─────────────────────────────────────────────────────────
        Message::OpenLesson { lesson_id } => modal::handle_open_lesson(state, &lesson_id),
        Message::OpenQuiz { quiz_id } => modal::handle_open_quiz(state, &quiz_id),

        Message::CloseLesson => {
            state.modal.close_lesson();
            UpdateResult::none()
        }

        Message::CloseQuiz => {
            state.modal.close_quiz();
            UpdateResult::none()
        }

        Message::CompleteLesson => modal::handle_complete_lesson(state),
        Message::SubmitQuiz { answers } => modal::handle_submit_quiz(state, answers),
        Message::ViewResults { quiz_id } => modal::handle_view_results(state, &quiz_id),

        // ─────────────────────────────────────────────────────────
        // Module List
        // ─────────────────────────────────────────────────────────
        Message::ToggleModule { module_id } => {
            module_list::handle_toggle_module(state, &module_id)
        }
        Message::ShowMoreModules => module_list::handle_show_more(state),

        // ─────────────────────────────────────────────────────────
        // Qubits Panel
        // ─────────────────────────────────────────────────────────
        Message::ToggleQubitsSelection { module_id } => {
            qubits::handle_toggle_selection(state, &module_id)
        }
        Message::SelectAllQubits => qubits::handle_select_all(state),
        Message::AdjustQuestionCount { module_id, delta } => {
            qubits::handle_adjust_count(state, &module_id, delta)
        }
        Message::StartQubitsTest { module_id } => qubits::handle_start_test(state, &module_id),
        Message::ResetQubits => qubits::handle_reset(state),
        Message::RequestAcclaim => qubits::handle_request_acclaim(state),

        // ─────────────────────────────────────────────────────────
        // Trainer Panel
        // ─────────────────────────────────────────────────────────
        Message::SetTrainerSubject(subject) => trainer::handle_set_subject(state, subject),
        Message::SetTrainerBody(body) => trainer::handle_set_body(state, body),
        Message::SendTrainerQuestion => trainer::handle_send_question(state),
    }
}

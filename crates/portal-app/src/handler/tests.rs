//! Handler behavior tests driven through `update()`

use std::collections::BTreeMap;

use crate::config::Settings;
use crate::handler::{update, UpdateAction};
use crate::message::Message;
use crate::services::OutcomeEvent;
use crate::state::DashboardState;
use crate::tabs::Tab;
use crate::test_fixtures::fixture_snapshot;

fn state() -> DashboardState {
    DashboardState::new(fixture_snapshot(), Settings::default())
}

// ─────────────────────────────────────────────────────────────────
// Modal Controller
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_open_lesson_puts_clone_in_slot() {
    let mut s = state();
    let result = update(&mut s, Message::OpenLesson { lesson_id: "module-1-l1".into() });
    assert!(result.message.is_none());
    assert!(result.action.is_none());
    assert_eq!(s.modal.lesson.as_ref().unwrap().id, "module-1-l1");
}

#[test]
fn test_open_unknown_lesson_is_a_noop() {
    let mut s = state();
    update(&mut s, Message::OpenLesson { lesson_id: "missing-id".into() });
    assert!(s.modal.lesson.is_none());
}

#[test]
fn test_open_unknown_lesson_keeps_current_slot() {
    let mut s = state();
    update(&mut s, Message::OpenLesson { lesson_id: "module-1-l1".into() });
    update(&mut s, Message::OpenLesson { lesson_id: "missing-id".into() });
    assert_eq!(s.modal.lesson.as_ref().unwrap().id, "module-1-l1");
}

#[test]
fn test_open_lesson_replaces_previous() {
    let mut s = state();
    update(&mut s, Message::OpenLesson { lesson_id: "module-1-l1".into() });
    update(&mut s, Message::OpenLesson { lesson_id: "module-1-l2".into() });
    assert_eq!(s.modal.lesson.as_ref().unwrap().id, "module-1-l2");
}

#[test]
fn test_open_lesson_under_locked_module_suppressed() {
    let mut s = state();
    update(&mut s, Message::OpenLesson { lesson_id: "module-3-l1".into() });
    assert!(s.modal.lesson.is_none());
}

#[test]
fn test_open_quiz_under_locked_module_suppressed() {
    let mut s = state();
    update(&mut s, Message::OpenQuiz { quiz_id: "module-3-k1".into() });
    assert!(s.modal.quiz.is_none());
}

#[test]
fn test_lesson_and_quiz_slots_are_independent() {
    let mut s = state();
    update(&mut s, Message::OpenLesson { lesson_id: "module-1-l1".into() });
    update(&mut s, Message::OpenQuiz { quiz_id: "module-1-k1".into() });
    assert!(s.modal.lesson.is_some());
    assert!(s.modal.quiz.is_some());

    update(&mut s, Message::CloseQuiz);
    assert!(s.modal.lesson.is_some());
    assert!(s.modal.quiz.is_none());
}

#[test]
fn test_close_lesson_when_empty_is_fine() {
    let mut s = state();
    let result = update(&mut s, Message::CloseLesson);
    assert!(result.action.is_none());
}

#[test]
fn test_complete_lesson_clears_slot_and_records_outcome() {
    let mut s = state();
    update(&mut s, Message::OpenLesson { lesson_id: "module-1-l1".into() });
    let result = update(&mut s, Message::CompleteLesson);

    assert!(s.modal.lesson.is_none());
    assert_eq!(
        result.action,
        Some(UpdateAction::RecordOutcome(OutcomeEvent::LessonCompleted {
            lesson_id: "module-1-l1".into(),
        }))
    );
}

#[test]
fn test_complete_lesson_with_nothing_open_is_a_noop() {
    let mut s = state();
    let result = update(&mut s, Message::CompleteLesson);
    assert!(result.action.is_none());
}

#[test]
fn test_submit_quiz_accepts_partial_answers() {
    let mut s = state();
    update(&mut s, Message::OpenQuiz { quiz_id: "module-1-k1".into() });

    // Only one of the two questions answered.
    let mut answers = BTreeMap::new();
    answers.insert("module-1-k1-q1".to_string(), "module-1-k1-q1-a".to_string());
    let result = update(&mut s, Message::SubmitQuiz { answers: answers.clone() });

    assert!(s.modal.quiz.is_none(), "submission clears the slot");
    assert_eq!(
        result.action,
        Some(UpdateAction::RecordOutcome(OutcomeEvent::QuizSubmitted {
            quiz_id: "module-1-k1".into(),
            answers,
        }))
    );
}

#[test]
fn test_submit_quiz_with_nothing_open_is_a_noop() {
    let mut s = state();
    let result = update(&mut s, Message::SubmitQuiz { answers: BTreeMap::new() });
    assert!(result.action.is_none());
}

#[test]
fn test_view_results_changes_nothing() {
    let mut s = state();
    let result = update(&mut s, Message::ViewResults { quiz_id: "module-1-k1".into() });
    assert!(result.action.is_none());
    assert!(s.modal.quiz.is_none());
}

// ─────────────────────────────────────────────────────────────────
// Module List
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_toggle_module_flips_expansion() {
    let mut s = state();
    assert!(!s.module_list.is_expanded("module-2"));
    update(&mut s, Message::ToggleModule { module_id: "module-2".into() });
    assert!(s.module_list.is_expanded("module-2"));
    update(&mut s, Message::ToggleModule { module_id: "module-2".into() });
    assert!(!s.module_list.is_expanded("module-2"));
}

#[test]
fn test_toggle_locked_module_rejected() {
    let mut s = state();
    update(&mut s, Message::ToggleModule { module_id: "module-3".into() });
    assert!(!s.module_list.is_expanded("module-3"));
}

#[test]
fn test_toggle_unknown_module_is_a_noop() {
    let mut s = state();
    let before = s.module_list.expanded.clone();
    update(&mut s, Message::ToggleModule { module_id: "missing-id".into() });
    assert_eq!(s.module_list.expanded, before);
}

#[test]
fn test_show_more_grows_window_by_increment() {
    let mut s = state();
    let before = s.module_list.visible;
    update(&mut s, Message::ShowMoreModules);
    assert_eq!(s.module_list.visible, before + s.settings.ui.show_more_increment);
}

// ─────────────────────────────────────────────────────────────────
// Qubits Panel
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_qubits_selection_toggle() {
    let mut s = state();
    update(&mut s, Message::ToggleQubitsSelection { module_id: "qm1".into() });
    assert!(s.qubits.is_selected("qm1"));
    update(&mut s, Message::ToggleQubitsSelection { module_id: "qm1".into() });
    assert!(!s.qubits.is_selected("qm1"));
}

#[test]
fn test_qubits_selection_unknown_module_noop() {
    let mut s = state();
    update(&mut s, Message::ToggleQubitsSelection { module_id: "missing-id".into() });
    assert!(s.qubits.selected.is_empty());
}

#[test]
fn test_select_all_then_clear() {
    let mut s = state();
    update(&mut s, Message::SelectAllQubits);
    assert!(s.qubits.is_selected("qm1"));
    assert!(s.qubits.is_selected("qm2"));

    update(&mut s, Message::SelectAllQubits);
    assert!(s.qubits.selected.is_empty());
}

#[test]
fn test_adjust_count_clamps() {
    let mut s = state();
    update(&mut s, Message::AdjustQuestionCount { module_id: "qm1".into(), delta: 5 });
    assert_eq!(s.qubits.count_for("qm1"), 10);
    update(&mut s, Message::AdjustQuestionCount { module_id: "qm1".into(), delta: -20 });
    assert_eq!(s.qubits.count_for("qm1"), 1);
}

#[test]
fn test_start_test_carries_current_count() {
    let mut s = state();
    update(&mut s, Message::AdjustQuestionCount { module_id: "qm1".into(), delta: -2 });
    let result = update(&mut s, Message::StartQubitsTest { module_id: "qm1".into() });
    assert_eq!(
        result.action,
        Some(UpdateAction::StartTest { module_id: "qm1".into(), question_count: 7 })
    );
}

#[test]
fn test_start_test_unknown_module_noop() {
    let mut s = state();
    let result = update(&mut s, Message::StartQubitsTest { module_id: "missing-id".into() });
    assert!(result.action.is_none());
}

#[test]
fn test_reset_and_acclaim_forward_as_actions() {
    let mut s = state();
    assert_eq!(
        update(&mut s, Message::ResetQubits).action,
        Some(UpdateAction::ResetAllQubits)
    );
    assert_eq!(
        update(&mut s, Message::RequestAcclaim).action,
        Some(UpdateAction::RequestAcclaim)
    );
}

// ─────────────────────────────────────────────────────────────────
// Trainer Panel
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_trainer_draft_roundtrip() {
    let mut s = state();
    update(&mut s, Message::SelectTab(Tab::Trainer));
    update(&mut s, Message::SetTrainerSubject("Lab access".into()));
    update(&mut s, Message::SetTrainerBody("The module 3 lab link 404s.".into()));

    let result = update(&mut s, Message::SendTrainerQuestion);
    assert_eq!(
        result.action,
        Some(UpdateAction::SendTrainerQuestion {
            subject: "Lab access".into(),
            body: "The module 3 lab link 404s.".into(),
        })
    );
    assert!(s.trainer_draft.subject.is_empty());
    assert!(s.trainer_draft.body.is_empty());
}

#[test]
fn test_send_empty_draft_is_allowed() {
    let mut s = state();
    let result = update(&mut s, Message::SendTrainerQuestion);
    assert_eq!(
        result.action,
        Some(UpdateAction::SendTrainerQuestion { subject: String::new(), body: String::new() })
    );
}

// ─────────────────────────────────────────────────────────────────
// Tab Router
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_select_tab_via_update() {
    let mut s = state();
    update(&mut s, Message::SelectTab(Tab::Resources));
    assert_eq!(s.active_tab, Tab::Resources);
}

#[test]
fn test_modal_survives_tab_switch() {
    // Overlays belong to the shell, not to any one panel.
    let mut s = state();
    update(&mut s, Message::OpenLesson { lesson_id: "module-1-l1".into() });
    update(&mut s, Message::SelectTab(Tab::Info));
    assert!(s.modal.lesson.is_some());
}

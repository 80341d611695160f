//! Video/quiz overlay handlers
//!
//! Id resolution lives here, not in `ModalState`: handlers look the id
//! up in the snapshot, enforce the locked-module rule, and only then
//! touch the slot. A miss is a logged no-op, never a panic.

use std::collections::BTreeMap;

use portal_core::prelude::*;

use crate::services::OutcomeEvent;
use crate::state::DashboardState;

use super::{UpdateAction, UpdateResult};

/// Open the video overlay for a lesson id.
///
/// Replaces whatever lesson is already in the slot. An unknown id or a
/// lesson under a locked module leaves the slot exactly as it was.
pub fn handle_open_lesson(state: &mut DashboardState, lesson_id: &str) -> UpdateResult {
    let Some((module, lesson)) = state.course().lesson_entry(lesson_id) else {
        warn!(lesson_id, "Ignoring open request for unknown lesson");
        return UpdateResult::none();
    };
    if !module.is_actionable() {
        debug!(
            lesson_id,
            module_id = %module.id,
            "Suppressing lesson open under locked module"
        );
        return UpdateResult::none();
    }
    state.modal.lesson = Some(lesson.clone());
    UpdateResult::none()
}

/// Open the quiz overlay for a knowledge-check id.
pub fn handle_open_quiz(state: &mut DashboardState, quiz_id: &str) -> UpdateResult {
    let Some((module, quiz)) = state.course().quiz_entry(quiz_id) else {
        warn!(quiz_id, "Ignoring open request for unknown quiz");
        return UpdateResult::none();
    };
    if !module.is_actionable() {
        debug!(
            quiz_id,
            module_id = %module.id,
            "Suppressing quiz open under locked module"
        );
        return UpdateResult::none();
    }
    state.modal.quiz = Some(quiz.clone());
    UpdateResult::none()
}

/// Playback finished: clear the slot and report the outcome.
///
/// With no lesson open this is a logged no-op; the completion signal
/// has nothing to attribute.
pub fn handle_complete_lesson(state: &mut DashboardState) -> UpdateResult {
    let Some(lesson) = state.modal.lesson.take() else {
        warn!("Lesson completion with no lesson open");
        return UpdateResult::none();
    };
    state.refresh_aggregates();
    UpdateResult::action(UpdateAction::RecordOutcome(OutcomeEvent::LessonCompleted {
        lesson_id: lesson.id,
    }))
}

/// Submit the open quiz with the given answer map.
///
/// Partial maps are accepted as-is; scoring belongs to the
/// progress-update collaborator. The slot is cleared either way.
pub fn handle_submit_quiz(
    state: &mut DashboardState,
    answers: BTreeMap<String, String>,
) -> UpdateResult {
    let Some(quiz) = state.modal.quiz.take() else {
        warn!("Quiz submission with no quiz open");
        return UpdateResult::none();
    };
    state.refresh_aggregates();
    UpdateResult::action(UpdateAction::RecordOutcome(OutcomeEvent::QuizSubmitted {
        quiz_id: quiz.id,
        answers,
    }))
}

/// Show stored results for a terminal-status quiz.
///
/// Read-only: the quiz already carries its per-question selections and
/// correctness, so there is nothing to mutate or persist.
pub fn handle_view_results(state: &mut DashboardState, quiz_id: &str) -> UpdateResult {
    match state.course().find_quiz(quiz_id) {
        Some(quiz) if quiz.status.is_terminal() => {
            info!(quiz_id, score = quiz.score_percent(), "Viewing quiz results");
        }
        Some(_) => {
            warn!(quiz_id, "Results requested for a non-terminal quiz");
        }
        None => {
            warn!(quiz_id, "Results requested for unknown quiz");
        }
    }
    UpdateResult::none()
}

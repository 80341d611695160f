//! Status→action mapping for lessons and knowledge checks
//!
//! Table-driven so the full mapping stays auditable in one place
//! instead of being scattered across branches.

use portal_core::{LessonStatus, QuizStatus};

/// Action offered on a lesson row. All of them open the lesson overlay;
/// none resets the lesson status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonAction {
    Rewatch,
    Resume,
    Watch,
}

impl LessonAction {
    pub fn label(&self) -> &'static str {
        match self {
            LessonAction::Rewatch => "Rewatch",
            LessonAction::Resume => "Resume",
            LessonAction::Watch => "Watch",
        }
    }
}

/// Action offered on a knowledge-check row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Attempt,
    Resume,
    Retake,
    ViewResults,
}

impl QuizAction {
    pub fn label(&self) -> &'static str {
        match self {
            QuizAction::Attempt => "Attempt",
            QuizAction::Resume => "Resume",
            QuizAction::Retake => "Retake Quiz",
            QuizAction::ViewResults => "View Results",
        }
    }
}

/// Lesson status → action table.
const LESSON_ACTIONS: &[(LessonStatus, LessonAction)] = &[
    (LessonStatus::Completed, LessonAction::Rewatch),
    (LessonStatus::InProgress, LessonAction::Resume),
    (LessonStatus::NotStarted, LessonAction::Watch),
];

/// Quiz status → actions table. Terminal statuses offer two
/// independent actions; a generated-but-untaken `Completed` check is
/// attempted like a fresh one.
const QUIZ_ACTIONS: &[(QuizStatus, &[QuizAction])] = &[
    (QuizStatus::Passed, &[QuizAction::Retake, QuizAction::ViewResults]),
    (QuizStatus::Failed, &[QuizAction::Retake, QuizAction::ViewResults]),
    (QuizStatus::InProgress, &[QuizAction::Resume]),
    (QuizStatus::NotStarted, &[QuizAction::Attempt]),
    (QuizStatus::Completed, &[QuizAction::Attempt]),
];

/// Look up the action for a lesson status.
pub fn lesson_action(status: LessonStatus) -> LessonAction {
    LESSON_ACTIONS
        .iter()
        .find(|(s, _)| *s == status)
        .map(|(_, a)| *a)
        .unwrap_or(LessonAction::Watch)
}

/// Look up the actions for a quiz status.
pub fn quiz_actions(status: QuizStatus) -> &'static [QuizAction] {
    QUIZ_ACTIONS
        .iter()
        .find(|(s, _)| *s == status)
        .map(|(_, a)| *a)
        .unwrap_or(&[QuizAction::Attempt])
}

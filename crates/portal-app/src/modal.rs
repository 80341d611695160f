//! Modal controller: the two independent "currently open" slots
//!
//! One slot for a lesson being watched, one for a knowledge check being
//! taken. Opening one never requires closing the other; the trigger
//! actions are mutually exclusive in the UI, but the state model keeps
//! the two concerns decoupled on purpose.

use portal_core::{KnowledgeCheck, Lesson};

/// Overlay slots owned by the dashboard shell.
///
/// Slots hold clones of snapshot entries; the snapshot itself is never
/// written. Resolution from id to content happens in the handlers
/// (state methods stay pure).
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    /// Lesson currently open in the video player overlay
    pub lesson: Option<Lesson>,

    /// Knowledge check currently open in the quiz overlay
    pub quiz: Option<KnowledgeCheck>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the lesson slot unconditionally.
    pub fn close_lesson(&mut self) {
        self.lesson = None;
    }

    /// Clear the quiz slot unconditionally.
    pub fn close_quiz(&mut self) {
        self.quiz = None;
    }

    /// Returns `true` if any overlay is currently open.
    pub fn has_modal_open(&self) -> bool {
        self.lesson.is_some() || self.quiz.is_some()
    }
}

//! Collaborator boundary: out-of-scope systems the dashboard notifies
//!
//! The core stops at "notify intent": every call here is fire-and-forget
//! from the dashboard's perspective, and the production implementations
//! record the intent in the log. Persistence, scoring, and messaging
//! are owned by the collaborators behind these traits.

use std::collections::BTreeMap;

use portal_core::prelude::*;

use crate::handler::UpdateAction;

/// A mutating outcome the progress-update collaborator must persist.
///
/// Decoupled from the UI slot-clearing logic so dismissal and
/// persistence stay independently testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeEvent {
    /// A lesson finished playback
    LessonCompleted { lesson_id: String },

    /// A quiz was submitted. The answer map may be partial.
    QuizSubmitted {
        quiz_id: String,
        /// question id → selected option id
        answers: BTreeMap<String, String>,
    },
}

/// Persists lesson/quiz outcomes and recomputes stored progress.
///
/// `record_outcome` must be idempotent: replaying the same event may
/// not double-count progress.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressSink {
    fn record_outcome(&mut self, event: &OutcomeEvent);
}

/// Runs Qubits self-test sessions.
#[cfg_attr(test, mockall::automock)]
pub trait TestSession {
    fn start_test(&mut self, module_id: &str, question_count: u8);
    fn reset_all(&mut self);
    fn request_acclaim(&mut self);
}

/// Delivers free-text questions to the trainer.
#[cfg_attr(test, mockall::automock)]
pub trait TrainerMailbox {
    fn send_question(&mut self, subject: &str, body: &str);
}

// ─────────────────────────────────────────────────────────────────
// Logging implementations (the production stubs)
// ─────────────────────────────────────────────────────────────────

/// Records outcome intents in the log.
#[derive(Debug, Default)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn record_outcome(&mut self, event: &OutcomeEvent) {
        match event {
            OutcomeEvent::LessonCompleted { lesson_id } => {
                info!(lesson_id, "Lesson completed");
            }
            OutcomeEvent::QuizSubmitted { quiz_id, answers } => {
                info!(quiz_id, answered = answers.len(), "Quiz submitted");
            }
        }
    }
}

/// Records test-session intents in the log.
#[derive(Debug, Default)]
pub struct LogTestSession;

impl TestSession for LogTestSession {
    fn start_test(&mut self, module_id: &str, question_count: u8) {
        info!(module_id, question_count, "Starting Qubits test");
    }

    fn reset_all(&mut self) {
        info!("Resetting Qubits progress");
    }

    fn request_acclaim(&mut self) {
        info!("Requesting acclaim");
    }
}

/// Records trainer questions in the log.
#[derive(Debug, Default)]
pub struct LogTrainerMailbox;

impl TrainerMailbox for LogTrainerMailbox {
    fn send_question(&mut self, subject: &str, body: &str) {
        info!(subject, body_len = body.len(), "Question sent to trainer");
    }
}

/// Route an [`UpdateAction`] to the collaborator that owns it.
pub fn dispatch_action(
    action: UpdateAction,
    progress: &mut dyn ProgressSink,
    tests: &mut dyn TestSession,
    mailbox: &mut dyn TrainerMailbox,
) {
    match action {
        UpdateAction::RecordOutcome(event) => progress.record_outcome(&event),
        UpdateAction::StartTest {
            module_id,
            question_count,
        } => tests.start_test(&module_id, question_count),
        UpdateAction::ResetAllQubits => tests.reset_all(),
        UpdateAction::RequestAcclaim => tests.request_acclaim(),
        UpdateAction::SendTrainerQuestion { subject, body } => {
            mailbox.send_question(&subject, &body)
        }
    }
}

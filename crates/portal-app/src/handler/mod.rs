//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `modal`: Video/quiz overlay handlers
//! - `module_list`: Module expand/collapse and reveal-window handlers
//! - `qubits`: Qubits panel handlers
//! - `trainer`: Trainer draft handlers

pub(crate) mod modal;
pub(crate) mod module_list;
pub(crate) mod qubits;
pub(crate) mod trainer;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use crate::services::OutcomeEvent;

// Re-export main entry point
pub use update::update;

/// Actions the shell should dispatch to collaborators after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Hand a lesson/quiz outcome to the progress-update collaborator
    RecordOutcome(OutcomeEvent),

    /// Begin a Qubits self-test for one module
    StartTest {
        module_id: String,
        question_count: u8,
    },

    /// Reset all Qubits progress
    ResetAllQubits,

    /// Request the acclaim/certificate share flow
    RequestAcclaim,

    /// Deliver a drafted question to the trainer
    SendTrainerQuestion { subject: String, body: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the shell to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    /// No follow-up needed
    pub fn none() -> Self {
        Self::default()
    }

    /// Follow-up message to process
    pub fn message(message: Message) -> Self {
        Self {
            message: Some(message),
            action: None,
        }
    }

    /// Action for the shell to perform
    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

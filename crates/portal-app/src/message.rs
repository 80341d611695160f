//! Message types for the dashboard (TEA pattern)

use std::collections::BTreeMap;

use crate::tabs::Tab;

/// All possible messages/user intents on the dashboard.
///
/// Every transition is synchronous and completes within the turn it was
/// dispatched; there is no background work behind any of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Tab Router
    // ─────────────────────────────────────────────────────────
    /// Switch the active content panel
    SelectTab(Tab),

    // ─────────────────────────────────────────────────────────
    // Modal Controller
    // ─────────────────────────────────────────────────────────
    /// Open the video overlay for a lesson id
    OpenLesson { lesson_id: String },

    /// Open the quiz overlay for a knowledge-check id
    OpenQuiz { quiz_id: String },

    /// Close the video overlay unconditionally
    CloseLesson,

    /// Close the quiz overlay unconditionally
    CloseQuiz,

    /// Playback finished: clear the slot and report the outcome
    CompleteLesson,

    /// Submit the open quiz. Partial answer maps are legal at this
    /// layer; scoring belongs to the progress-update collaborator.
    SubmitQuiz {
        /// question id → selected option id
        answers: BTreeMap<String, String>,
    },

    /// Show stored results for a terminal-status quiz
    ViewResults { quiz_id: String },

    // ─────────────────────────────────────────────────────────
    // Module List
    // ─────────────────────────────────────────────────────────
    /// Expand/collapse a module (rejected for locked modules)
    ToggleModule { module_id: String },

    /// Grow the visible module window by the configured increment
    ShowMoreModules,

    // ─────────────────────────────────────────────────────────
    // Qubits Panel
    // ─────────────────────────────────────────────────────────
    /// Flip a module card's selection checkbox
    ToggleQubitsSelection { module_id: String },

    /// Select-all toggle over the module cards
    SelectAllQubits,

    /// Step a card's "questions to attempt" counter (clamped 1-10)
    AdjustQuestionCount { module_id: String, delta: i16 },

    /// Begin a self-test with the currently chosen question count
    StartQubitsTest { module_id: String },

    /// Reset all Qubits progress (fire-and-forget to the collaborator)
    ResetQubits,

    /// Request the acclaim/certificate share flow
    RequestAcclaim,

    // ─────────────────────────────────────────────────────────
    // Trainer Panel
    // ─────────────────────────────────────────────────────────
    /// Edit the draft question subject
    SetTrainerSubject(String),

    /// Edit the draft question body
    SetTrainerBody(String),

    /// Send the draft question to the trainer
    SendTrainerQuestion,
}

//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Snapshot Ingestion Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Snapshot file not found: {path}")]
    SnapshotNotFound { path: PathBuf },

    #[error("Malformed snapshot: {message}")]
    Snapshot { message: String },

    #[error("Duplicate {kind} id in snapshot: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Course total_videos is {declared} but modules sum to {actual}")]
    VideoCountMismatch { declared: u32, actual: u32 },

    #[error("Module {module_id}: watched_videos ({watched}) exceeds total_videos ({total})")]
    WatchedExceedsTotal {
        module_id: String,
        watched: u32,
        total: u32,
    },

    #[error(
        "Knowledge check {quiz_id}: attempted_questions ({attempted}) exceeds total_questions ({total})"
    )]
    AttemptedExceedsTotal {
        quiz_id: String,
        attempted: u32,
        total: u32,
    },

    #[error("Knowledge check {quiz_id} has a terminal status but unattempted questions remain")]
    TerminalStatusIncomplete { quiz_id: String },

    #[error("Question {question_id} has {count} correct options (expected exactly 1)")]
    CorrectOptionCount { question_id: String, count: usize },

    #[error("Question {question_id}: correct_option_id does not match the flagged option")]
    CorrectOptionMismatch { question_id: String },

    #[error("Question {question_id} is marked answered but has no selected option")]
    AnsweredWithoutSelection { question_id: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn snapshot(message: impl Into<String>) -> Self {
        Self::Snapshot {
            message: message.into(),
        }
    }

    pub fn snapshot_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SnapshotNotFound { path: path.into() }
    }

    pub fn duplicate_id(kind: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            kind,
            id: id.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Configuration problems fall back to defaults; everything the
    /// snapshot validator rejects is unrecoverable by design (fail fast
    /// at ingestion rather than propagate undefined state downstream).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Config { .. } | Error::ConfigNotFound { .. } | Error::ConfigInvalid { .. }
        )
    }

    /// Check if this error should abort session start
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::SnapshotNotFound { .. }
                | Error::Snapshot { .. }
                | Error::DuplicateId { .. }
                | Error::VideoCountMismatch { .. }
                | Error::WatchedExceedsTotal { .. }
                | Error::AttemptedExceedsTotal { .. }
                | Error::TerminalStatusIncomplete { .. }
                | Error::CorrectOptionCount { .. }
                | Error::CorrectOptionMismatch { .. }
                | Error::AnsweredWithoutSelection { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

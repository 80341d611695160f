//! # portal-core - Core Domain Types
//!
//! Foundation crate for the Learner Portal. Provides the session
//! snapshot model, ingestion validation, derived progress aggregates,
//! and error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Course Tree (`course`, `quiz`)
//! - [`Course`] - Immutable course with ordered [`Module`]s
//! - [`Module`] - Content unit with [`Lesson`]s and [`KnowledgeCheck`]s
//! - [`Lesson`], [`LessonKind`], [`LessonStatus`]
//! - [`KnowledgeCheck`], [`QuizStatus`], [`QuizQuestion`], [`QuizOption`]
//!
//! ### Aggregates (`progress`, `qubits`)
//! - [`StudentProgress`] + [`recompute_progress()`] - derived stats over the tree
//! - [`QubitsModule`], [`QubitsProgress`] + [`recompute_qubits_progress()`]
//!
//! ### Snapshot (`snapshot`)
//! - [`PortalSnapshot`] - the immutable session hand-off payload
//! - [`load_snapshot()`] - read + fail-fast validation from a JSON file
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use portal_core::prelude::*;
//! ```

pub mod course;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod progress;
pub mod qubits;
pub mod quiz;
pub mod resources;
pub mod snapshot;

// Re-export commonly used types at crate root for convenience
pub use course::{Course, ExamVoucher, Lesson, LessonKind, LessonStatus, Module};
pub use error::{Error, Result, ResultExt};
pub use progress::{recompute_progress, StudentProgress};
pub use qubits::{recompute_qubits_progress, QubitsModule, QubitsProgress};
pub use quiz::{KnowledgeCheck, QuizOption, QuizQuestion, QuizStatus};
pub use resources::{AdditionalResource, ResourceKind, Student, TrainerContact};
pub use snapshot::{load_snapshot, PortalSnapshot};

//! Qubits self-test modules (practice questions, distinct from
//! per-module knowledge checks)

use serde::{Deserialize, Serialize};

/// A self-test module card in the Qubits tab
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QubitsModule {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub total_questions: u32,
    pub unattempted: u32,
    pub correct_answers: u32,
    /// Correct percentage over attempted questions (0-100)
    pub correct_percentage: u8,
    /// Seed value for the per-card "questions to attempt" counter
    pub questions_to_attempt: u8,
    /// Seed value for the per-card selection checkbox
    pub is_selected: bool,
}

impl QubitsModule {
    pub fn attempted(&self) -> u32 {
        self.total_questions.saturating_sub(self.unattempted)
    }
}

/// Aggregate shown in the Qubits dashboard sidebar
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QubitsProgress {
    pub quizzes_completed: u32,
    pub questions_attempted: u32,
    /// Overall correct percentage over attempted questions (0-100)
    pub overall_score: u8,
}

/// Recompute the Qubits aggregate from the module cards.
///
/// A module counts as completed once no unattempted questions remain.
/// The overall score is correct answers over attempted questions,
/// rounded; 0 when nothing has been attempted yet.
pub fn recompute_qubits_progress(modules: &[QubitsModule]) -> QubitsProgress {
    let quizzes_completed = modules.iter().filter(|m| m.unattempted == 0).count() as u32;
    let questions_attempted: u32 = modules.iter().map(|m| m.attempted()).sum();
    let correct: u32 = modules.iter().map(|m| m.correct_answers).sum();

    let overall_score = if questions_attempted == 0 {
        0
    } else {
        ((correct * 100 + questions_attempted / 2) / questions_attempted).min(100) as u8
    };

    QubitsProgress {
        quizzes_completed,
        questions_attempted,
        overall_score,
    }
}

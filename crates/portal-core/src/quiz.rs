//! Knowledge checks (per-module quizzes) and their questions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Knowledge check lifecycle status
///
/// `Completed` marks a check that was generated but never taken in the
/// current seed data; only `Passed` and `Failed` are terminal and
/// imply every question was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Passed,
    Failed,
}

impl QuizStatus {
    /// Terminal statuses require `attempted_questions == total_questions`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, QuizStatus::Passed | QuizStatus::Failed)
    }
}

/// An assessment tied to a module, containing multiple-choice questions
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeCheck {
    pub id: String,
    pub title: String,
    pub module_id: String,
    pub total_questions: u32,
    pub attempted_questions: u32,
    pub correct_answers: u32,
    pub status: QuizStatus,
    pub questions: Vec<QuizQuestion>,
    /// Passing threshold as a percentage (0-100)
    pub passing_score: u8,
    pub can_retake: bool,
    #[serde(default)]
    pub last_attempt_date: Option<DateTime<Utc>>,
}

impl KnowledgeCheck {
    /// Percentage of correct answers over all questions, rounded.
    /// Returns 0 for an empty check.
    pub fn score_percent(&self) -> u8 {
        if self.total_questions == 0 {
            return 0;
        }
        ((self.correct_answers * 100 + self.total_questions / 2) / self.total_questions) as u8
    }

    /// True once every question has been attempted.
    pub fn fully_attempted(&self) -> bool {
        self.attempted_questions == self.total_questions
    }
}

/// A multiple-choice question
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    /// 1-based ordinal within the check
    pub question_number: u32,
    pub question_text: String,
    pub options: Vec<QuizOption>,
    pub correct_option_id: String,
    #[serde(default)]
    pub selected_option_id: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    pub is_answered: bool,
    #[serde(default)]
    pub is_correct: Option<bool>,
}

impl QuizQuestion {
    /// The single option flagged correct, if the question is well-formed.
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.is_correct)
    }
}

/// A single answer option
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

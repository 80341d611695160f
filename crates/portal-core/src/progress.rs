//! Student progress aggregates and their recomputation
//!
//! The seed snapshot supplies a `StudentProgress` value, but treating it
//! as an independent constant lets the displayed stats drift from the
//! module/quiz tree. [`recompute_progress`] is the single source of
//! truth: derivable counters come from the tree, and only fields that
//! cannot be derived (watch time, streak, last activity) carry over
//! from the seed.

use serde::{Deserialize, Serialize};

use crate::course::Course;

/// Aggregate progress counters for the dashboard sidebar
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProgress {
    /// Overall completion percentage (0-100)
    pub overall_progress: u8,
    pub modules_completed: u32,
    pub total_modules: u32,
    pub videos_watched: u32,
    pub total_videos: u32,
    /// Opaque display string, not derivable from the tree
    pub time_watched: String,
    /// Opaque display string, not derivable from the tree
    pub total_time: String,
    /// Mean score over terminal-status knowledge checks (0-100)
    pub average_score: u8,
    pub questions_attempted: u32,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub incorrect_answers: u32,
    /// Consecutive-day streak, supplied by the seed
    pub current_streak: u32,
    pub last_activity_date: String,
}

/// Recompute the progress aggregate from the course tree.
///
/// Pure function: derivable counters are summed from modules and
/// knowledge checks; `time_watched`, `total_time`, `current_streak`,
/// and `last_activity_date` are carried from `seed` verbatim.
pub fn recompute_progress(course: &Course, seed: &StudentProgress) -> StudentProgress {
    let total_modules = course.modules.len() as u32;
    let modules_completed = course.modules.iter().filter(|m| m.is_completed).count() as u32;

    let videos_watched: u32 = course.modules.iter().map(|m| m.watched_videos).sum();
    let total_videos: u32 = course.modules.iter().map(|m| m.total_videos).sum();

    let checks = course
        .modules
        .iter()
        .flat_map(|m| m.knowledge_checks.iter());
    let mut questions_attempted = 0u32;
    let mut total_questions = 0u32;
    let mut correct_answers = 0u32;
    let mut terminal_scores: Vec<u32> = Vec::new();
    for check in checks {
        questions_attempted += check.attempted_questions;
        total_questions += check.total_questions;
        correct_answers += check.correct_answers;
        if check.status.is_terminal() {
            terminal_scores.push(u32::from(check.score_percent()));
        }
    }
    let incorrect_answers = questions_attempted.saturating_sub(correct_answers);

    let average_score = if terminal_scores.is_empty() {
        0
    } else {
        let sum: u32 = terminal_scores.iter().sum();
        let n = terminal_scores.len() as u32;
        ((sum + n / 2) / n) as u8
    };

    // Overall completion weights watched videos and attempted questions
    // equally across the whole course.
    let done = videos_watched + questions_attempted;
    let total = total_videos + total_questions;
    let overall_progress = if total == 0 {
        0
    } else {
        ((done * 100 + total / 2) / total).min(100) as u8
    };

    StudentProgress {
        overall_progress,
        modules_completed,
        total_modules,
        videos_watched,
        total_videos,
        time_watched: seed.time_watched.clone(),
        total_time: seed.total_time.clone(),
        average_score,
        questions_attempted,
        total_questions,
        correct_answers,
        incorrect_answers,
        current_streak: seed.current_streak,
        last_activity_date: seed.last_activity_date.clone(),
    }
}

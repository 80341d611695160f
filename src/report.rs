//! Session report rendered by the `lportal` binary
//!
//! A flat, serializable view over the dashboard state: identity,
//! course header, and the two derived aggregates. The text form is the
//! default CLI output; `--json` emits the serde form.

use serde::Serialize;

use portal_app::DashboardState;
use portal_core::{QubitsProgress, StudentProgress};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub student: String,
    pub course_code: String,
    pub course_name: String,
    pub provider: String,
    pub progress: StudentProgress,
    pub qubits: QubitsProgress,
    pub locked_modules: u32,
}

impl SessionReport {
    pub fn from_state(state: &DashboardState) -> Self {
        let course = state.course();
        Self {
            student: state.snapshot.student.visible_name.clone(),
            course_code: course.code.clone(),
            course_name: course.name.clone(),
            provider: course.provider.clone(),
            progress: state.progress.clone(),
            qubits: state.qubits_progress.clone(),
            locked_modules: course.modules.iter().filter(|m| m.is_locked).count() as u32,
        }
    }

    /// Human-readable form for terminal output.
    pub fn render_text(&self) -> String {
        let p = &self.progress;
        let q = &self.qubits;
        let mut out = String::new();
        out.push_str(&format!(
            "{} - {} ({})\nStudent: {}\n\n",
            self.course_code, self.course_name, self.provider, self.student
        ));
        out.push_str(&format!(
            "Progress: {}%  ({}/{} modules, {}/{} videos, {}/{} questions)\n",
            p.overall_progress,
            p.modules_completed,
            p.total_modules,
            p.videos_watched,
            p.total_videos,
            p.questions_attempted,
            p.total_questions,
        ));
        out.push_str(&format!(
            "Scores: average {}%, {} correct / {} incorrect\n",
            p.average_score, p.correct_answers, p.incorrect_answers
        ));
        out.push_str(&format!(
            "Qubits: {} quizzes completed, {} questions attempted, overall {}%\n",
            q.quizzes_completed, q.questions_attempted, q.overall_score
        ));
        if self.locked_modules > 0 {
            out.push_str(&format!("Locked modules: {}\n", self.locked_modules));
        }
        out
    }
}

//! Course content tree: modules, lessons, and exam voucher

use serde::{Deserialize, Serialize};

use crate::progress::StudentProgress;
use crate::quiz::KnowledgeCheck;

/// A course as handed off by the data-provisioning collaborator.
///
/// Read-only for the lifetime of a session. Aggregate counts are
/// validated against the module tree at ingestion
/// ([`crate::snapshot::PortalSnapshot::validate`]) and never mutated
/// afterwards.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub code: String,
    pub name: String,
    pub provider: String,
    #[serde(default)]
    pub provider_logo: Option<String>,
    pub category: String,
    pub total_videos: u32,
    pub total_duration: String,
    pub total_questions: u32,
    pub modules: Vec<Module>,
    /// Seed progress snapshot. Derived counters are recomputed from the
    /// module tree; only non-derivable display fields are read from here.
    pub progress: StudentProgress,
    pub certificate_available: bool,
    #[serde(default)]
    pub exam_voucher: Option<ExamVoucher>,
}

impl Course {
    /// Find a lesson by id across all modules (first match wins).
    pub fn find_lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.modules
            .iter()
            .find_map(|m| m.lessons.iter().find(|l| l.id == lesson_id))
    }

    /// Find a knowledge check by id across all modules (first match wins).
    pub fn find_quiz(&self, quiz_id: &str) -> Option<&KnowledgeCheck> {
        self.modules
            .iter()
            .find_map(|m| m.knowledge_checks.iter().find(|q| q.id == quiz_id))
    }

    /// Find a lesson together with its owning module.
    ///
    /// Used by interaction handlers that must suppress actions on
    /// content nested under a locked module.
    pub fn lesson_entry(&self, lesson_id: &str) -> Option<(&Module, &Lesson)> {
        self.modules.iter().find_map(|m| {
            m.lessons
                .iter()
                .find(|l| l.id == lesson_id)
                .map(|l| (m, l))
        })
    }

    /// Find a knowledge check together with its owning module.
    pub fn quiz_entry(&self, quiz_id: &str) -> Option<(&Module, &KnowledgeCheck)> {
        self.modules.iter().find_map(|m| {
            m.knowledge_checks
                .iter()
                .find(|q| q.id == quiz_id)
                .map(|q| (m, q))
        })
    }

    /// Find a module by id.
    pub fn find_module(&self, module_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }
}

/// A top-level content unit containing lessons and knowledge checks
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    /// 1-based ordinal shown in the module header
    pub number: u32,
    pub title: String,
    pub duration: String,
    pub is_completed: bool,
    pub is_locked: bool,
    pub lessons: Vec<Lesson>,
    pub knowledge_checks: Vec<KnowledgeCheck>,
    pub total_videos: u32,
    pub watched_videos: u32,
}

impl Module {
    /// Locked modules reject all nested interaction, regardless of the
    /// status fields on their lessons and quizzes.
    pub fn is_actionable(&self) -> bool {
        !self.is_locked
    }

    /// Header resume label: a module with any watched video resumes,
    /// an untouched one starts fresh.
    pub fn has_started(&self) -> bool {
        self.watched_videos > 0
    }
}

/// Kind of a single watchable unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Video,
    Reading,
    Lab,
}

/// Lesson completion status
///
/// Monotonic in the intended product flow (`NotStarted` → `InProgress`
/// → `Completed`); the snapshot is read-only so no runtime transition
/// exists in this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

/// A single watchable unit with a completion status
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: LessonKind,
    pub duration: String,
    pub status: LessonStatus,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub watched_duration: Option<String>,
    pub total_duration: String,
}

/// Certification exam voucher bundled with a course
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamVoucher {
    pub code: String,
    pub exam_name: String,
    pub expiry_date: String,
    pub is_redeemed: bool,
    #[serde(default)]
    pub redeemed_date: Option<String>,
    #[serde(default)]
    pub exam_scheduled_date: Option<String>,
}

//! Session snapshot: the immutable hand-off payload and its validation
//!
//! The data-provisioning collaborator promises the invariants below at
//! hand-off time. This module checks them anyway and fails fast with a
//! descriptive error, so malformed seed data never propagates into the
//! state layer as undefined behavior.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::error::{Error, Result};
use crate::qubits::{QubitsModule, QubitsProgress};
use crate::resources::{AdditionalResource, Student, TrainerContact};

/// Everything the dashboard shell receives at session start.
///
/// Read-only for the lifetime of a session; the shell and its children
/// never write back into it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalSnapshot {
    pub course: Course,
    pub qubits_modules: Vec<QubitsModule>,
    pub qubits_progress: QubitsProgress,
    pub resources: Vec<AdditionalResource>,
    pub trainer: TrainerContact,
    pub student: Student,
}

impl PortalSnapshot {
    /// Validate all ingestion invariants, failing on the first violation.
    pub fn validate(&self) -> Result<()> {
        self.validate_course()?;
        self.validate_qubits()?;
        check_unique("resource", self.resources.iter().map(|r| r.id.as_str()))?;
        Ok(())
    }

    fn validate_course(&self) -> Result<()> {
        let course = &self.course;

        check_unique("module", course.modules.iter().map(|m| m.id.as_str()))?;
        check_unique(
            "lesson",
            course
                .modules
                .iter()
                .flat_map(|m| m.lessons.iter())
                .map(|l| l.id.as_str()),
        )?;
        check_unique(
            "knowledge check",
            course
                .modules
                .iter()
                .flat_map(|m| m.knowledge_checks.iter())
                .map(|k| k.id.as_str()),
        )?;
        check_unique(
            "question",
            course
                .modules
                .iter()
                .flat_map(|m| m.knowledge_checks.iter())
                .flat_map(|k| k.questions.iter())
                .map(|q| q.id.as_str()),
        )?;

        let video_sum: u32 = course.modules.iter().map(|m| m.total_videos).sum();
        if video_sum != course.total_videos {
            return Err(Error::VideoCountMismatch {
                declared: course.total_videos,
                actual: video_sum,
            });
        }

        for module in &course.modules {
            if module.watched_videos > module.total_videos {
                return Err(Error::WatchedExceedsTotal {
                    module_id: module.id.clone(),
                    watched: module.watched_videos,
                    total: module.total_videos,
                });
            }

            for check in &module.knowledge_checks {
                if check.attempted_questions > check.total_questions {
                    return Err(Error::AttemptedExceedsTotal {
                        quiz_id: check.id.clone(),
                        attempted: check.attempted_questions,
                        total: check.total_questions,
                    });
                }
                if check.status.is_terminal() && !check.fully_attempted() {
                    return Err(Error::TerminalStatusIncomplete {
                        quiz_id: check.id.clone(),
                    });
                }

                for question in &check.questions {
                    check_unique(
                        "option",
                        question.options.iter().map(|o| o.id.as_str()),
                    )?;

                    let correct_count =
                        question.options.iter().filter(|o| o.is_correct).count();
                    if correct_count != 1 {
                        return Err(Error::CorrectOptionCount {
                            question_id: question.id.clone(),
                            count: correct_count,
                        });
                    }
                    // The flagged option and the denormalized pointer must agree.
                    let flagged = question.correct_option().map(|o| o.id.as_str());
                    if flagged != Some(question.correct_option_id.as_str()) {
                        return Err(Error::CorrectOptionMismatch {
                            question_id: question.id.clone(),
                        });
                    }
                    if question.is_answered && question.selected_option_id.is_none() {
                        return Err(Error::AnsweredWithoutSelection {
                            question_id: question.id.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    fn validate_qubits(&self) -> Result<()> {
        check_unique(
            "qubits module",
            self.qubits_modules.iter().map(|m| m.id.as_str()),
        )?;
        for module in &self.qubits_modules {
            if module.unattempted > module.total_questions {
                return Err(Error::snapshot(format!(
                    "qubits module {}: unattempted ({}) exceeds total questions ({})",
                    module.id, module.unattempted, module.total_questions
                )));
            }
        }
        Ok(())
    }
}

fn check_unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::duplicate_id(kind, id));
        }
    }
    Ok(())
}

/// Load and validate a snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<PortalSnapshot> {
    if !path.exists() {
        return Err(Error::snapshot_not_found(path));
    }
    let raw = std::fs::read_to_string(path)?;
    let snapshot: PortalSnapshot = serde_json::from_str(&raw)?;
    snapshot.validate()?;
    tracing::info!(
        course = %snapshot.course.code,
        modules = snapshot.course.modules.len(),
        "Snapshot loaded and validated"
    );
    Ok(snapshot)
}

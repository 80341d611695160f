//! End-to-end dashboard flow over the bundled demo snapshot

use std::collections::BTreeMap;
use std::path::Path;

use portal_app::config::Settings;
use portal_app::services::OutcomeEvent;
use portal_app::{update, DashboardState, Message, Tab, UpdateAction};
use portal_core::load_snapshot;

use learner_portal::report::SessionReport;

fn demo_state() -> DashboardState {
    let snapshot = load_snapshot(Path::new("demos/snapshot.json")).expect("demo snapshot loads");
    DashboardState::new(snapshot, Settings::default())
}

#[test]
fn demo_snapshot_validates_and_derives_progress() {
    let state = demo_state();

    // 2 of 6 videos watched, 2 of 4 questions attempted.
    assert_eq!(state.progress.videos_watched, 2);
    assert_eq!(state.progress.total_videos, 6);
    assert_eq!(state.progress.questions_attempted, 2);
    assert_eq!(state.progress.total_questions, 4);
    assert_eq!(state.progress.overall_progress, 40);

    // One passed check with a perfect score.
    assert_eq!(state.progress.average_score, 100);
    assert_eq!(state.progress.incorrect_answers, 0);

    // Non-derivable fields carry over from the seed.
    assert_eq!(state.progress.current_streak, 4);
    assert_eq!(state.progress.time_watched, "1h 05m");

    // Qubits: 12 attempted, 9 correct, nothing fully completed.
    assert_eq!(state.qubits_progress.questions_attempted, 12);
    assert_eq!(state.qubits_progress.overall_score, 75);
    assert_eq!(state.qubits_progress.quizzes_completed, 0);
}

#[test]
fn lesson_watch_flow() {
    let mut state = demo_state();

    // Locked module content never reaches the overlay.
    update(&mut state, Message::OpenLesson { lesson_id: "m2-l1".into() });
    assert!(state.modal.lesson.is_none());

    // Watch the remaining module 1 lesson to completion.
    update(&mut state, Message::OpenLesson { lesson_id: "m1-l3".into() });
    assert_eq!(state.modal.lesson.as_ref().unwrap().id, "m1-l3");

    let result = update(&mut state, Message::CompleteLesson);
    assert!(state.modal.lesson.is_none());
    assert_eq!(
        result.action,
        Some(UpdateAction::RecordOutcome(OutcomeEvent::LessonCompleted {
            lesson_id: "m1-l3".into(),
        }))
    );
}

#[test]
fn quiz_submit_flow_accepts_partial_answers() {
    let mut state = demo_state();
    update(&mut state, Message::OpenQuiz { quiz_id: "m1-k1".into() });

    let mut answers = BTreeMap::new();
    answers.insert("m1-k1-q1".to_string(), "m1-k1-q1-a".to_string());
    let result = update(&mut state, Message::SubmitQuiz { answers: answers.clone() });

    assert!(state.modal.quiz.is_none());
    assert_eq!(
        result.action,
        Some(UpdateAction::RecordOutcome(OutcomeEvent::QuizSubmitted {
            quiz_id: "m1-k1".into(),
            answers,
        }))
    );
}

#[test]
fn qubits_session_flow() {
    let mut state = demo_state();

    // Seeded from the snapshot cards.
    assert!(state.qubits.is_selected("qm-identity"));
    assert!(!state.qubits.is_selected("qm-storage"));

    update(&mut state, Message::SelectAllQubits);
    assert!(state.qubits.is_selected("qm-storage"));

    // Push the counter past the cap, then start a test.
    update(
        &mut state,
        Message::AdjustQuestionCount { module_id: "qm-storage".into(), delta: 3 },
    );
    let result = update(&mut state, Message::StartQubitsTest { module_id: "qm-storage".into() });
    assert_eq!(
        result.action,
        Some(UpdateAction::StartTest {
            module_id: "qm-storage".into(),
            question_count: 10,
        })
    );

    // Leaving the tab discards the panel state.
    update(&mut state, Message::SelectTab(Tab::Resources));
    update(&mut state, Message::SelectTab(Tab::Qubits));
    assert!(!state.qubits.is_selected("qm-storage"));
    assert_eq!(state.qubits.count_for("qm-storage"), 9);
}

#[test]
fn trainer_question_flow() {
    let mut state = demo_state();

    update(&mut state, Message::SelectTab(Tab::Trainer));
    update(&mut state, Message::SetTrainerSubject("Voucher scheduling".into()));
    update(
        &mut state,
        Message::SetTrainerBody("Can I schedule the exam before finishing module 2?".into()),
    );

    let result = update(&mut state, Message::SendTrainerQuestion);
    assert_eq!(
        result.action,
        Some(UpdateAction::SendTrainerQuestion {
            subject: "Voucher scheduling".into(),
            body: "Can I schedule the exam before finishing module 2?".into(),
        })
    );
    assert!(state.trainer_draft.subject.is_empty());
}

#[test]
fn session_report_over_demo_snapshot() {
    let state = demo_state();
    let report = SessionReport::from_state(&state);

    assert_eq!(report.course_code, "AZ-104");
    assert_eq!(report.student, "Jordan Lee");
    assert_eq!(report.locked_modules, 1);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["progress"]["overallProgress"], 40);
    assert_eq!(json["qubits"]["overallScore"], 75);

    let text = report.render_text();
    assert!(text.contains("Progress: 40%"));
    assert!(text.contains("Locked modules: 1"));
}

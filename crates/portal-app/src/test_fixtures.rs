//! Shared fixture snapshot for handler and state tests

use portal_core::{
    AdditionalResource, Course, ExamVoucher, KnowledgeCheck, Lesson, LessonKind, LessonStatus,
    Module, PortalSnapshot, QubitsModule, QubitsProgress, QuizOption, QuizQuestion, QuizStatus,
    ResourceKind, Student, StudentProgress, TrainerContact,
};

pub fn fixture_lesson(id: &str, status: LessonStatus) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: format!("Lesson {id}"),
        kind: LessonKind::Video,
        duration: "12:30".to_string(),
        status,
        video_url: Some(format!("https://cdn.example.com/{id}.mp4")),
        thumbnail_url: None,
        watched_duration: None,
        total_duration: "12:30".to_string(),
    }
}

pub fn fixture_quiz(id: &str, status: QuizStatus) -> KnowledgeCheck {
    let attempted = if status == QuizStatus::NotStarted { 0 } else { 2 };
    KnowledgeCheck {
        id: id.to_string(),
        title: format!("Knowledge Check {id}"),
        module_id: String::new(),
        total_questions: 2,
        attempted_questions: attempted,
        correct_answers: if attempted == 0 { 0 } else { 1 },
        status,
        questions: vec![
            fixture_question(&format!("{id}-q1")),
            fixture_question(&format!("{id}-q2")),
        ],
        passing_score: 70,
        can_retake: true,
        last_attempt_date: None,
    }
}

fn fixture_question(id: &str) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        question_number: 1,
        question_text: "Which service hosts the lab environment?".to_string(),
        options: vec![
            QuizOption {
                id: format!("{id}-a"),
                text: "Option A".to_string(),
                is_correct: true,
            },
            QuizOption {
                id: format!("{id}-b"),
                text: "Option B".to_string(),
                is_correct: false,
            },
        ],
        correct_option_id: format!("{id}-a"),
        selected_option_id: None,
        explanation: None,
        is_answered: false,
        is_correct: None,
    }
}

pub fn fixture_module(id: &str, number: u32, locked: bool) -> Module {
    let mut quiz = fixture_quiz(&format!("{id}-k1"), QuizStatus::NotStarted);
    quiz.module_id = id.to_string();
    Module {
        id: id.to_string(),
        number,
        title: format!("Module {number}"),
        duration: "1:05:00".to_string(),
        is_completed: false,
        is_locked: locked,
        lessons: vec![
            fixture_lesson(&format!("{id}-l1"), LessonStatus::NotStarted),
            fixture_lesson(&format!("{id}-l2"), LessonStatus::NotStarted),
        ],
        knowledge_checks: vec![quiz],
        total_videos: 2,
        watched_videos: 0,
    }
}

pub fn fixture_qubits_module(id: &str, to_attempt: u8, selected: bool) -> QubitsModule {
    QubitsModule {
        id: id.to_string(),
        title: format!("Qubits {id}"),
        subtitle: None,
        total_questions: 20,
        unattempted: 20,
        correct_answers: 0,
        correct_percentage: 0,
        questions_to_attempt: to_attempt,
        is_selected: selected,
    }
}

/// A small but structurally complete snapshot: three modules (the third
/// locked), two Qubits cards, one resource. Passes
/// `PortalSnapshot::validate`.
pub fn fixture_snapshot() -> PortalSnapshot {
    let modules = vec![
        fixture_module("module-1", 1, false),
        fixture_module("module-2", 2, false),
        fixture_module("module-3", 3, true),
    ];
    let course = Course {
        id: "course-1".to_string(),
        code: "AZ-104".to_string(),
        name: "Microsoft Azure Administrator".to_string(),
        provider: "Microsoft".to_string(),
        provider_logo: None,
        category: "Cloud".to_string(),
        total_videos: 6,
        total_duration: "14:30:00".to_string(),
        total_questions: 6,
        modules,
        progress: StudentProgress {
            time_watched: "0h 0m".to_string(),
            total_time: "14h 30m".to_string(),
            current_streak: 3,
            last_activity_date: "2026-02-10".to_string(),
            ..StudentProgress::default()
        },
        certificate_available: false,
        exam_voucher: Some(ExamVoucher {
            code: "AZ104-VOUCHER-001".to_string(),
            exam_name: "AZ-104".to_string(),
            expiry_date: "2026-12-31".to_string(),
            is_redeemed: false,
            redeemed_date: None,
            exam_scheduled_date: None,
        }),
    };

    PortalSnapshot {
        course,
        qubits_modules: vec![
            fixture_qubits_module("qm1", 9, false),
            fixture_qubits_module("qm2", 9, false),
        ],
        qubits_progress: QubitsProgress::default(),
        resources: vec![AdditionalResource {
            id: "r1".to_string(),
            title: "Exam study guide".to_string(),
            kind: ResourceKind::Pdf,
            url: "https://example.com/study-guide.pdf".to_string(),
            description: None,
            icon: None,
        }],
        trainer: TrainerContact {
            id: "t1".to_string(),
            name: "Sam Rivera".to_string(),
            email: "sam.rivera@example.com".to_string(),
            phone: None,
            avatar: None,
            specialization: "Azure infrastructure".to_string(),
            has_unread_messages: false,
            message_count: 0,
        },
        student: Student {
            visible_name: "Jordan Lee".to_string(),
            learner_id: "learner-42".to_string(),
        },
    }
}

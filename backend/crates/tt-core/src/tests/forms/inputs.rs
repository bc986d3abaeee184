use crate::{
    BatchInput, BatchStatus, BatchTraineeInput, ClassInput, LoginCredentials,
    ProgressRecordInput, UserInput, Validate,
};

use chrono::NaiveDate;

#[test]
fn test_batch_input_valid() {
    let input = BatchInput {
        name: "Spring Cohort".into(),
        program: 4,
        start_date: NaiveDate::from_ymd_opt(2025, 3, 1),
        end_date: NaiveDate::from_ymd_opt(2025, 5, 30),
        status: BatchStatus::Scheduled,
        max_capacity: 30,
    };

    assert!(input.validate().is_ok());
}

#[test]
fn test_batch_input_requires_program_and_name() {
    let errors = BatchInput::default().validate().unwrap_err();

    assert!(errors.contains("name"));
    assert!(errors.contains("program"));
}

#[test]
fn test_batch_input_end_before_start() {
    let input = BatchInput {
        name: "Backwards".into(),
        program: 1,
        start_date: NaiveDate::from_ymd_opt(2025, 5, 1),
        end_date: NaiveDate::from_ymd_opt(2025, 4, 1),
        ..BatchInput::default()
    };

    let errors = input.validate().unwrap_err();

    assert!(errors.contains("end_date"));
}

#[test]
fn test_progress_percentage_bounds() {
    let mut input = ProgressRecordInput {
        trainee: 1,
        batch: 1,
        completion_percentage: 100,
        ..ProgressRecordInput::default()
    };
    assert!(input.validate().is_ok());

    input.completion_percentage = 101;
    assert!(input.validate().unwrap_err().contains("completion_percentage"));

    input.completion_percentage = -1;
    assert!(input.validate().unwrap_err().contains("completion_percentage"));
}

#[test]
fn test_batch_trainee_rating_bounds() {
    let mut input = BatchTraineeInput {
        batch: 1,
        trainee: 2,
        rating: Some(5),
        ..BatchTraineeInput::default()
    };
    assert!(input.validate().is_ok());

    input.rating = Some(0);
    assert!(input.validate().unwrap_err().contains("rating"));
}

#[test]
fn test_class_input_requires_schedule_fields() {
    let input = ClassInput {
        name: "Async Rust".into(),
        trainer_name: String::new(),
        class_timings: String::new(),
        google_meet_link: Some("meet.google.com/abc".into()),
        description: None,
        is_active: true,
    };

    let errors = input.validate().unwrap_err();

    assert!(errors.contains("trainer_name"));
    assert!(errors.contains("class_timings"));
    assert!(errors.contains("google_meet_link"));
}

#[test]
fn test_user_input_email_shape() {
    let input = UserInput {
        username: "trainer1".into(),
        email: "not-an-email".into(),
        ..UserInput::default()
    };

    assert_eq!(
        input.validate().unwrap_err().get("email"),
        Some("Enter a valid email address")
    );
}

#[test]
fn test_login_credentials_required() {
    let errors = LoginCredentials::default().validate().unwrap_err();

    assert!(errors.contains("username"));
    assert!(errors.contains("password"));
    assert!(LoginCredentials::new("admin@Stack", "St@ckly2025").validate().is_ok());
}

#[test]
fn test_batch_input_from_existing_batch() {
    let batch: crate::Batch = serde_json::from_value(serde_json::json!({
        "id": 9,
        "name": "Autumn Cohort",
        "program": 2,
        "start_date": "2025-09-01",
        "status": "running",
        "max_capacity": 25,
    }))
    .unwrap();

    let input = BatchInput::from(&batch);

    assert_eq!(input.name, "Autumn Cohort");
    assert_eq!(input.program, 2);
    assert_eq!(input.start_date, NaiveDate::from_ymd_opt(2025, 9, 1));
    assert_eq!(input.end_date, None);
    assert_eq!(input.status, BatchStatus::Running);
    assert_eq!(input.max_capacity, 25);
}

#[test]
fn test_user_input_from_user_never_carries_password() {
    let user: crate::User = serde_json::from_value(serde_json::json!({
        "id": 4,
        "username": "trainer4",
        "email": "trainer4@example.com",
        "role": "trainer",
        "expertise": "Databases",
    }))
    .unwrap();

    let input = UserInput::from(&user);

    assert_eq!(input.username, "trainer4");
    assert_eq!(input.expertise.as_deref(), Some("Databases"));
    assert!(input.password.is_none());
}

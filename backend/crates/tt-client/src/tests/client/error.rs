use crate::ClientError;

use serde_json::json;
use tt_core::{CoreError, FieldErrors, RegistrationForm, Validate};

#[test]
fn test_api_error_takes_detail_as_message() {
    let err = ClientError::api(404, json!({ "detail": "Not found." }));

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.general_message(), "Not found.");
    assert!(!err.is_unauthorized());
}

#[test]
fn test_api_error_keeps_payload_unchanged() {
    let payload = json!({ "email": ["user with this email already exists."] });
    let err = ClientError::api(400, payload.clone());

    assert_eq!(err.payload(), Some(&payload));

    let errors = err.field_errors().unwrap();
    assert!(errors.is_field_keyed());
    assert_eq!(
        errors.get("email"),
        Some("user with this email already exists.")
    );
}

#[test]
fn test_api_error_without_body_falls_back_to_status() {
    let err = ClientError::api(500, serde_json::Value::Null);

    assert_eq!(err.general_message(), "request failed with status 500");
    assert!(err.field_errors().is_none());
}

#[test]
fn test_unauthorized_message_prefers_server_detail() {
    let err = ClientError::unauthorized(
        "/token/",
        json!({ "detail": "No active account found with the given credentials" }),
    );

    assert!(err.is_unauthorized());
    assert_eq!(err.status(), Some(401));
    assert_eq!(
        err.general_message(),
        "No active account found with the given credentials"
    );
}

#[test]
fn test_unauthorized_without_body_reports_expiry() {
    let err = ClientError::unauthorized("/programs/", serde_json::Value::Null);

    assert!(err.general_message().contains("session has expired"));
}

#[test]
fn test_core_validation_error_keeps_field_errors() {
    let form = RegistrationForm {
        username: "trainee1".into(),
        email: "trainee1@example.com".into(),
        password: "longenough1".into(),
        password2: "different1".into(),
        first_name: "Tess".into(),
        last_name: "Trainee".into(),
        ..Default::default()
    };

    let err = ClientError::from(form.check().unwrap_err());

    let errors = err.field_errors().unwrap();
    assert_eq!(errors.get("password2"), Some("Passwords do not match"));
}

#[test]
fn test_core_parse_error_becomes_general_validation() {
    let core: CoreError = "superuser".parse::<tt_core::Role>().unwrap_err();

    let err = ClientError::from(core);

    let errors = err.field_errors().unwrap();
    assert!(!errors.is_field_keyed());
    assert!(errors.get(FieldErrors::GENERAL).is_some());
}

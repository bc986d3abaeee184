use crate::{RegistrationForm, Role, Validate};

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        username: "new.trainee".into(),
        email: "trainee@stackly.test".into(),
        password: "Secur3Pass!".into(),
        password2: "Secur3Pass!".into(),
        first_name: "Tara".into(),
        last_name: "Trainee".into(),
        phone: None,
        role: Role::Trainee,
    }
}

#[test]
fn test_valid_registration_passes() {
    assert!(valid_form().validate().is_ok());
}

#[test]
fn test_mismatched_passwords_flag_password2() {
    let form = RegistrationForm {
        password2: "Different1!".into(),
        ..valid_form()
    };

    let errors = form.validate().unwrap_err();

    assert_eq!(errors.get("password2"), Some("Passwords do not match"));
    assert!(!errors.contains("password"));
}

#[test]
fn test_short_password_rejected() {
    let form = RegistrationForm {
        password: "short".into(),
        password2: "short".into(),
        ..valid_form()
    };

    let errors = form.validate().unwrap_err();

    assert_eq!(
        errors.get("password"),
        Some("Password must be at least 8 characters long")
    );
}

#[test]
fn test_required_fields() {
    let errors = RegistrationForm::default().validate().unwrap_err();

    for field in ["username", "email", "password", "first_name", "last_name"] {
        assert!(errors.contains(field), "missing error for {field}");
    }
}

#[test]
fn test_check_wraps_in_core_error() {
    let form = RegistrationForm {
        password2: "Different1!".into(),
        ..valid_form()
    };

    let err = form.check().unwrap_err();

    assert!(err.field_errors().unwrap().contains("password2"));
}

#[test]
fn test_debug_hides_passwords() {
    let rendered = format!("{:?}", valid_form());

    assert!(!rendered.contains("Secur3Pass!"));
}

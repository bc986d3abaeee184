use crate::{FieldErrors, PasswordResetForm, Validate};

#[test]
fn test_valid_reset_form() {
    let form = PasswordResetForm {
        token: "abc123".into(),
        password: "N3wPassword".into(),
        password2: "N3wPassword".into(),
    };

    assert!(form.validate().is_ok());
}

#[test]
fn test_missing_token_is_general_error() {
    let form = PasswordResetForm {
        token: String::new(),
        password: "N3wPassword".into(),
        password2: "N3wPassword".into(),
    };

    let errors = form.validate().unwrap_err();

    assert!(errors.contains(FieldErrors::GENERAL));
}

#[test]
fn test_confirmation_required() {
    let form = PasswordResetForm {
        token: "abc123".into(),
        password: "N3wPassword".into(),
        password2: String::new(),
    };

    let errors = form.validate().unwrap_err();

    assert_eq!(errors.get("password2"), Some("Please confirm your password"));
}

#[test]
fn test_mismatch_rejected() {
    let form = PasswordResetForm {
        token: "abc123".into(),
        password: "N3wPassword".into(),
        password2: "N3wPassw0rd".into(),
    };

    let errors = form.validate().unwrap_err();

    assert_eq!(errors.get("password2"), Some("Passwords do not match"));
}

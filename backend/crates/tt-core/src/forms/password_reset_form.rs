use crate::{FieldErrors, MIN_PASSWORD_LENGTH, Validate};

/// New password chosen from a reset link.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordResetForm {
    pub token: String,
    pub password: String,
    pub password2: String,
}

impl std::fmt::Debug for PasswordResetForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordResetForm").finish_non_exhaustive()
    }
}

impl Validate for PasswordResetForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.token.trim().is_empty() {
            errors.set(
                FieldErrors::GENERAL,
                "Invalid reset link. Please request a new password reset.",
            );
        }
        if self.password.is_empty() {
            errors.set("password", "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.set(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LENGTH} characters long"),
            );
        }
        if self.password2.is_empty() {
            errors.set("password2", "Please confirm your password");
        } else if self.password != self.password2 {
            errors.set("password2", "Passwords do not match");
        }

        errors.into_validation()
    }
}

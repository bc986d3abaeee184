use crate::{FieldErrors, MIN_PASSWORD_LENGTH, Role, Validate};

use serde::{Deserialize, Serialize};

/// New-account profile posted to `/register/`.
///
/// `password2` travels to the server as well; it re-checks the match.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl std::fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl Validate for RegistrationForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.require("username", &self.username, "Username is required");
        errors.require("email", &self.email, "Email is required");
        if self.password.is_empty() {
            errors.set("password", "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.set(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LENGTH} characters long"),
            );
        }
        if self.password != self.password2 {
            errors.set("password2", "Passwords do not match");
        }
        errors.require("first_name", &self.first_name, "First name is required");
        errors.require("last_name", &self.last_name, "Last name is required");

        errors.into_validation()
    }
}

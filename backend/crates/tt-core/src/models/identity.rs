//! The signed-in principal and the user accounts admins manage.

use crate::models::role::deserialize_optional_role;
use crate::{FieldErrors, Role, Validate};

use serde::{Deserialize, Serialize};

/// Authenticated user as returned by the login and current-user endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_role")]
    pub role: Option<Role>,
    /// Trainer expertise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expertise: Option<String>,
    /// Trainee designation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active_flag: Option<bool>,
}

/// User accounts listed under `/users/` share the identity shape.
pub type User = Identity;

impl Identity {
    /// "First Last", or the username when neither name part is set.
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.username.clone()
        } else {
            name.to_string()
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Admins carry every trainer capability.
    pub fn is_trainer(&self) -> bool {
        matches!(self.role, Some(Role::Trainer | Role::Admin))
    }

    pub fn is_trainee(&self) -> bool {
        self.has_role(Role::Trainee)
    }
}

/// Create / full-replace payload for `/users/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub expertise: Option<String>,
    pub designation: Option<String>,
    /// Only sent when an admin creates an account with an initial password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Validate for UserInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("username", &self.username, "Username is required");
        errors.require("email", &self.email, "Email is required");
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            errors.set("email", "Enter a valid email address");
        }
        errors.into_validation()
    }
}

/// Starting point for a full replace of an existing record.
impl From<&User> for UserInput {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            role: user.role,
            expertise: user.expertise.clone(),
            designation: user.designation.clone(),
            password: None,
        }
    }
}

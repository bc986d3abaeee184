//! Live classes published by trainers.

use crate::models::program::default_true;
use crate::{FieldErrors, Validate};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub trainer_name: String,
    /// Free text, e.g. "Mon, Wed, Fri 10:00 AM - 12:00 PM"
    #[serde(default)]
    pub class_timings: String,
    #[serde(default)]
    pub google_meet_link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInput {
    pub name: String,
    pub trainer_name: String,
    pub class_timings: String,
    pub google_meet_link: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl Validate for ClassInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Class name is required");
        errors.require("trainer_name", &self.trainer_name, "Trainer name is required");
        errors.require(
            "class_timings",
            &self.class_timings,
            "Class timings are required",
        );
        if let Some(link) = self.google_meet_link.as_deref()
            && !link.is_empty()
            && !(link.starts_with("http://") || link.starts_with("https://"))
        {
            errors.set("google_meet_link", "Enter a valid URL");
        }
        errors.into_validation()
    }
}

/// Starting point for a full replace of an existing record.
impl From<&Class> for ClassInput {
    fn from(class: &Class) -> Self {
        Self {
            name: class.name.clone(),
            trainer_name: class.trainer_name.clone(),
            class_timings: class.class_timings.clone(),
            google_meet_link: class.google_meet_link.clone(),
            description: class.description.clone(),
            is_active: class.is_active,
        }
    }
}

use crate::models::program::default_true;
use crate::{FieldErrors, Validate};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job designation a trainee can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Designation {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignationInput {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl Validate for DesignationInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Designation name is required");
        errors.into_validation()
    }
}

/// Starting point for a full replace of an existing record.
impl From<&Designation> for DesignationInput {
    fn from(designation: &Designation) -> Self {
        Self {
            name: designation.name.clone(),
            description: designation.description.clone(),
            is_active: designation.is_active,
        }
    }
}

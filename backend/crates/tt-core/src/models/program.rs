//! Training programs and their topics.

use crate::{FieldErrors, Validate};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_days: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Read-only, nested by the server
    #[serde(default)]
    pub topics: Vec<ProgramTopic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramTopic {
    pub id: i64,
    pub program: i64,
    pub topic_name: String,
    #[serde(default)]
    pub topic_description: Option<String>,
    #[serde(default)]
    pub topic_order: i32,
    #[serde(default)]
    pub estimated_hours: i32,
}

/// Create / full-replace payload for `/programs/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramInput {
    pub name: String,
    pub description: Option<String>,
    pub duration_days: i32,
    pub is_active: bool,
}

impl Default for ProgramInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            duration_days: 0,
            is_active: true,
        }
    }
}

impl Validate for ProgramInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Program name is required");
        if self.duration_days < 0 {
            errors.set("duration_days", "Duration cannot be negative");
        }
        errors.into_validation()
    }
}

pub(crate) fn default_true() -> bool {
    true
}

/// Starting point for a full replace of an existing record.
impl From<&Program> for ProgramInput {
    fn from(program: &Program) -> Self {
        Self {
            name: program.name.clone(),
            description: program.description.clone(),
            duration_days: program.duration_days,
            is_active: program.is_active,
        }
    }
}

//! Per-topic progress of a trainee within a batch.

use crate::{FieldErrors, ProgressStatus, Validate};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_COMPLETION_PERCENTAGE: i32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub id: i64,
    pub trainee: i64,
    pub batch: i64,
    #[serde(default)]
    pub topic: Option<i64>,
    #[serde(default)]
    pub status: ProgressStatus,
    #[serde(default)]
    pub completion_percentage: i32,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_by: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecordInput {
    pub trainee: i64,
    pub batch: i64,
    pub topic: Option<i64>,
    pub status: ProgressStatus,
    pub completion_percentage: i32,
    pub notes: Option<String>,
}

impl Validate for ProgressRecordInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.trainee <= 0 {
            errors.set("trainee", "Select a trainee");
        }
        if self.batch <= 0 {
            errors.set("batch", "Select a batch");
        }
        if !(0..=MAX_COMPLETION_PERCENTAGE).contains(&self.completion_percentage) {
            errors.set(
                "completion_percentage",
                format!("Completion must be between 0 and {MAX_COMPLETION_PERCENTAGE}"),
            );
        }
        errors.into_validation()
    }
}

/// Starting point for a full replace of an existing record.
impl From<&ProgressRecord> for ProgressRecordInput {
    fn from(record: &ProgressRecord) -> Self {
        Self {
            trainee: record.trainee,
            batch: record.batch,
            topic: record.topic,
            status: record.status,
            completion_percentage: record.completion_percentage,
            notes: record.notes.clone(),
        }
    }
}

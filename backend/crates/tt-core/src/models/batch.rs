//! Scheduled runs of a program.

use crate::{BatchStatus, FieldErrors, Validate};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    pub id: i64,
    pub name: String,
    /// Program id
    pub program: i64,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: BatchStatus,
    #[serde(default)]
    pub max_capacity: i32,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create / full-replace payload for `/batches/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchInput {
    pub name: String,
    pub program: i64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: BatchStatus,
    pub max_capacity: i32,
}

impl Validate for BatchInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Batch name is required");
        if self.program <= 0 {
            errors.set("program", "Select a program");
        }
        if self.max_capacity < 0 {
            errors.set("max_capacity", "Capacity cannot be negative");
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && end < start
        {
            errors.set("end_date", "End date cannot be before start date");
        }
        errors.into_validation()
    }
}

/// Starting point for a full replace of an existing record.
impl From<&Batch> for BatchInput {
    fn from(batch: &Batch) -> Self {
        Self {
            name: batch.name.clone(),
            program: batch.program,
            start_date: batch.start_date,
            end_date: batch.end_date,
            status: batch.status,
            max_capacity: batch.max_capacity,
        }
    }
}

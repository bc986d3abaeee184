//! Enrolment of a trainee in a batch.

use crate::{EnrollmentStatus, FieldErrors, Validate};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchTrainee {
    pub id: i64,
    pub batch: i64,
    pub trainee: i64,
    #[serde(default)]
    pub enrollment_date: Option<NaiveDate>,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: EnrollmentStatus,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchTraineeInput {
    pub batch: i64,
    pub trainee: i64,
    pub enrollment_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    pub status: EnrollmentStatus,
    pub rating: Option<i32>,
    pub feedback: Option<String>,
}

impl Validate for BatchTraineeInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.batch <= 0 {
            errors.set("batch", "Select a batch");
        }
        if self.trainee <= 0 {
            errors.set("trainee", "Select a trainee");
        }
        if let Some(rating) = self.rating
            && !(MIN_RATING..=MAX_RATING).contains(&rating)
        {
            errors.set(
                "rating",
                format!("Rating must be between {MIN_RATING} and {MAX_RATING}"),
            );
        }
        errors.into_validation()
    }
}

/// Starting point for a full replace of an existing record.
impl From<&BatchTrainee> for BatchTraineeInput {
    fn from(enrollment: &BatchTrainee) -> Self {
        Self {
            batch: enrollment.batch,
            trainee: enrollment.trainee,
            enrollment_date: enrollment.enrollment_date,
            completion_date: enrollment.completion_date,
            status: enrollment.status,
            rating: enrollment.rating,
            feedback: enrollment.feedback.clone(),
        }
    }
}

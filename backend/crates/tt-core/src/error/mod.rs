use crate::FieldErrors;

use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {errors} {location}")]
    Validation {
        errors: FieldErrors,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid batch status: {value} {location}")]
    InvalidBatchStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid enrollment status: {value} {location}")]
    InvalidEnrollmentStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid progress status: {value} {location}")]
    InvalidProgressStatus {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field errors carried by a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

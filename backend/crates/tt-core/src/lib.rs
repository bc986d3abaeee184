//! Shared data model for the training tracker console.
//!
//! Everything here is pure: server resources, the signed-in identity, list
//! envelopes, and the client-side form checks that run before a request is sent.

pub mod error;
pub mod field_errors;
pub mod forms;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use field_errors::FieldErrors;
pub use forms::{
    Validate, login_credentials::LoginCredentials, password_reset_form::PasswordResetForm,
    registration_form::RegistrationForm,
};
pub use models::batch::{Batch, BatchInput};
pub use models::batch_status::{BatchStatus, StatusTone};
pub use models::batch_trainee::{BatchTrainee, BatchTraineeInput};
pub use models::class::{Class, ClassInput};
pub use models::designation::{Designation, DesignationInput};
pub use models::enrollment_status::EnrollmentStatus;
pub use models::identity::{Identity, User, UserInput};
pub use models::listing::{Listing, Page};
pub use models::program::{Program, ProgramInput, ProgramTopic};
pub use models::progress_record::{ProgressRecord, ProgressRecordInput};
pub use models::progress_status::ProgressStatus;
pub use models::role::Role;
pub use models::token::{AccessToken, LoginResponse};

/// Minimum password length enforced before registration or reset is submitted.
pub const MIN_PASSWORD_LENGTH: usize = 8;

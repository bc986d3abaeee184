//! Client-side checks that run before a form is submitted.

pub mod login_credentials;
pub mod password_reset_form;
pub mod registration_form;

use crate::{CoreResult, FieldErrors};

pub trait Validate {
    /// Collect every problem with the form, keyed by input name.
    fn validate(&self) -> Result<(), FieldErrors>;

    /// [`validate`](Self::validate) as a located [`CoreError`](crate::CoreError).
    #[track_caller]
    fn check(&self) -> CoreResult<()> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) => errors.into_result(),
        }
    }
}

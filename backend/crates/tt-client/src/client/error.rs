use crate::storage::StorageError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;
use thiserror::Error;
use tt_core::{CoreError, FieldErrors};

const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";
const NETWORK_MESSAGE: &str = "Could not reach the server. Check your connection and try again.";

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error ({status}): {message} {location}")]
    Api {
        status: u16,
        message: String,
        payload: Value,
        location: ErrorLocation,
    },

    /// The server answered 401. Stored tokens are already gone by the time this
    /// reaches the caller.
    #[error("Unauthorized request to {path} {location}")]
    Unauthorized {
        path: String,
        payload: Value,
        location: ErrorLocation,
    },

    #[error("Validation error: {errors} {location}")]
    Validation {
        errors: FieldErrors,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Session storage error: {source}")]
    Storage {
        #[source]
        source: StorageError,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Non-2xx answer other than 401. The message is taken from the payload when
    /// it carries one.
    #[track_caller]
    pub fn api(status: u16, payload: Value) -> Self {
        let errors = FieldErrors::from_payload(&payload);
        let message = match errors.general_message() {
            Some(message) => message.to_string(),
            None if !errors.is_empty() => errors.to_string(),
            None => format!("request failed with status {status}"),
        };

        ClientError::Api {
            status,
            message,
            payload,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(path: &str, payload: Value) -> Self {
        ClientError::Unauthorized {
            path: path.to_string(),
            payload,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(errors: FieldErrors) -> Self {
        ClientError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// HTTP status of a server rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }

    /// Server error body, unchanged.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Api { payload, .. } | Self::Unauthorized { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Field-keyed messages from local validation or from the server body.
    pub fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            Self::Validation { errors, .. } => Some(errors.clone()),
            Self::Api { payload, .. } | Self::Unauthorized { payload, .. } => {
                let errors = FieldErrors::from_payload(payload);
                (!errors.is_empty()).then_some(errors)
            }
            _ => None,
        }
    }

    /// One line suitable for a banner when nothing can be attributed to an input.
    pub fn general_message(&self) -> String {
        match self {
            Self::Http { .. } => NETWORK_MESSAGE.to_string(),
            Self::Api { message, .. } => message.clone(),
            Self::Unauthorized { payload, .. } => FieldErrors::from_payload(payload)
                .general_message()
                .unwrap_or(SESSION_EXPIRED_MESSAGE)
                .to_string(),
            Self::Validation { errors, .. } => errors
                .general_message()
                .map(str::to_string)
                .unwrap_or_else(|| errors.to_string()),
            Self::Json { message, .. } => format!("Unexpected response from server: {message}"),
            Self::Storage { source } => source.recovery_hint().to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<StorageError> for ClientError {
    fn from(source: StorageError) -> Self {
        ClientError::Storage { source }
    }
}

impl From<CoreError> for ClientError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { errors, location } => {
                ClientError::Validation { errors, location }
            }
            other => ClientError::validation(FieldErrors::general(other.to_string())),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

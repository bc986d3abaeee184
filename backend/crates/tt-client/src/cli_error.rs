use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use tt_client::{ClientError, StorageError};
use tt_config::ConfigError;

/// Everything that can stop the console before or while running a command.
#[derive(Error, Debug)]
pub(crate) enum CliError {
    #[error("{source}")]
    Config {
        #[source]
        source: ConfigError,
    },

    #[error("{source}")]
    Storage {
        #[source]
        source: StorageError,
    },

    #[error("{source}")]
    Client {
        #[source]
        source: ClientError,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not logged in {location}")]
    NotLoggedIn { location: ErrorLocation },
}

impl CliError {
    #[track_caller]
    pub(crate) fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn not_logged_in() -> Self {
        Self::NotLoggedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(source: ConfigError) -> Self {
        Self::Config { source }
    }
}

impl From<StorageError> for CliError {
    fn from(source: StorageError) -> Self {
        Self::Storage { source }
    }
}

impl From<ClientError> for CliError {
    fn from(source: ClientError) -> Self {
        Self::Client { source }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::Client {
            source: ClientError::from_json(err),
        }
    }
}

pub(crate) type Result<T> = std::result::Result<T, CliError>;

use club_client::{ClientError, LoginError};
use club_config::ConfigError;
use club_session::{SessionError, StorageError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("{}", .0.user_message())]
    Login(#[from] LoginError),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not signed in {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Recovery hint for storage failures, shown after the error line.
    pub fn recovery_hint(&self) -> Option<&'static str> {
        match self {
            Self::Storage(e) => Some(e.recovery_hint()),
            Self::Session(SessionError::Storage { source, .. }) => Some(source.recovery_hint()),
            _ => None,
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_signed_in() -> Self {
        Self::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

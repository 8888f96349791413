use crate::StorageError;

use club_auth::AuthError;
use club_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session storage failed: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },

    #[error("Session record could not be encoded: {source} {location}")]
    Record {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Credential rejected: {source} {location}")]
    InvalidToken {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },
}

impl From<StorageError> for SessionError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for SessionError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Record {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for SessionError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::InvalidToken {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;

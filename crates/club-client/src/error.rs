use crate::ValidationErrors;
use crate::messages::{INVALID_CREDENTIALS, SERVER_UNREACHABLE, SESSION_FAILED};

use club_session::SessionError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while talking to the login endpoint
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Login rejected with status {status} {location}")]
    Rejected { status: u16, location: ErrorLocation },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
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

    #[track_caller]
    pub fn rejected(status: u16) -> Self {
        ClientError::Rejected {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The server answered and refused the credentials.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
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

pub type Result<T> = std::result::Result<T, ClientError>;

/// Why a login attempt did not complete.
#[derive(Error, Debug)]
pub enum LoginError {
    /// Client-side field errors; nothing was sent.
    #[error("Invalid login form: {0}")]
    Validation(ValidationErrors),

    #[error("A login request is already in flight {location}")]
    AlreadySubmitting { location: ErrorLocation },

    /// The endpoint rejected the credentials.
    #[error("Login rejected: {source} {location}")]
    AuthFailure {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    /// The endpoint could not be reached or answered unintelligibly.
    #[error("Login endpoint unreachable: {source} {location}")]
    Transport {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    /// The credential was issued but the session could not accept it.
    #[error("Could not start session: {source} {location}")]
    Session {
        #[source]
        source: SessionError,
        location: ErrorLocation,
    },
}

impl LoginError {
    /// Text to show in the login view's alert.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(errors) => errors.to_string(),
            Self::AlreadySubmitting { .. } => crate::messages::SUBMITTING_LABEL.to_string(),
            Self::AuthFailure { .. } => INVALID_CREDENTIALS.to_string(),
            Self::Transport { .. } => SERVER_UNREACHABLE.to_string(),
            Self::Session {
                source: SessionError::InvalidToken { .. },
                ..
            } => INVALID_CREDENTIALS.to_string(),
            Self::Session { .. } => SESSION_FAILED.to_string(),
        }
    }
}

impl From<ClientError> for LoginError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if source.is_rejection() {
            Self::AuthFailure { source, location }
        } else {
            Self::Transport { source, location }
        }
    }
}

impl From<SessionError> for LoginError {
    #[track_caller]
    fn from(source: SessionError) -> Self {
        Self::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token decode failed: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signature rejected: {source} {location}")]
    Signature {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Token expired at {exp} {location}")]
    Expired { exp: i64, location: ErrorLocation },
}

impl AuthError {
    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Both malformed and wrongly signed tokens are "not a usable credential".
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Signature { .. })
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;

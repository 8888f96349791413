use crate::{AuthError, Result as AuthErrorResult};

use club_core::User;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};

/// Payload embedded in a club credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Expiration timestamp (Unix seconds), rounded up when issued with a fraction
    #[serde(deserialize_with = "numeric_date")]
    pub exp: i64,
    /// Identity the credential was issued for
    pub user: User,
    /// Issued at timestamp (Unix seconds), informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl TokenClaims {
    /// A credential whose expiry is at or before `now` is no longer usable.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }

    #[track_caller]
    pub fn ensure_fresh(&self, now: i64) -> AuthErrorResult<()> {
        if self.is_expired_at(now) {
            return Err(AuthError::Expired {
                exp: self.exp,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

/// NumericDate may carry a fraction. Rounding up keeps `exp <= now` exact for whole-second `now`.
fn numeric_date<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumericDate {
        Whole(i64),
        Fractional(f64),
    }

    match NumericDate::deserialize(deserializer)? {
        NumericDate::Whole(seconds) => Ok(seconds),
        NumericDate::Fractional(seconds)
            if seconds.is_finite() && seconds.abs() < i64::MAX as f64 =>
        {
            Ok(seconds.ceil() as i64)
        }
        NumericDate::Fractional(seconds) => Err(D::Error::custom(format!(
            "exp {seconds} is not a representable timestamp"
        ))),
    }
}

use crate::{CoreError, Result as CoreErrorResult, User};

use serde::{Deserialize, Serialize};

/// Durable mirror of the session, stored as `{"token": ..., "user": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: String,
    pub user: User,
}

/// Loose shape used while parsing, so that an empty or missing field is
/// reported as a malformed record instead of a generic JSON error.
#[derive(Deserialize)]
struct RawRecord {
    token: Option<String>,
    user: Option<User>,
}

impl PersistedSession {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// Parse a stored record. Fails on invalid JSON, an empty token or a missing user.
    #[track_caller]
    pub fn parse(raw: &str) -> CoreErrorResult<Self> {
        let record: RawRecord = serde_json::from_str(raw)?;

        match (record.token, record.user) {
            (Some(token), Some(user)) if !token.is_empty() => Ok(Self { token, user }),
            (None, _) => Err(CoreError::malformed_record("token is missing")),
            (Some(_), None) => Err(CoreError::malformed_record("user is missing")),
            (Some(_), Some(_)) => Err(CoreError::malformed_record("token is empty")),
        }
    }

    #[track_caller]
    pub fn to_json(&self) -> CoreErrorResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

use crate::{ConfigError, ConfigErrorResult, DEFAULT_REVALIDATE_ON_LOGIN, DEFAULT_STORAGE_KEY};

use serde::Deserialize;

pub const MIN_JWT_SECRET_LENGTH: usize = 32;
pub const MAX_STORAGE_KEY_LENGTH: usize = 64;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Key the persisted session record is stored under
    pub storage_key: String,
    /// When set, credentials must carry a valid HS256 signature
    pub jwt_secret: Option<String>,
    /// Decode and expiry-check the token handed to `login` before accepting it
    pub revalidate_on_login: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            storage_key: String::from(DEFAULT_STORAGE_KEY),
            jwt_secret: None,
            revalidate_on_login: DEFAULT_REVALIDATE_ON_LOGIN,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.storage_key.is_empty() || self.storage_key.len() > MAX_STORAGE_KEY_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.storage_key must be 1-{} characters",
                MAX_STORAGE_KEY_LENGTH
            )));
        }

        if !self
            .storage_key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::auth(
                "auth.storage_key may only contain letters, digits, '_' and '-'",
            ));
        }

        if let Some(secret) = &self.jwt_secret
            && secret.len() < MIN_JWT_SECRET_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        Ok(())
    }
}

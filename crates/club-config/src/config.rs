use crate::{
    ApiConfig, AuthConfig, CONFIG_DIR_ENV, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig, StorageConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub auth: AuthConfig,
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CLUB_CONFIG_DIR env var, else use ./.club/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CLUB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CLUB_CONFIG_DIR env var > ./.club/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.auth.validate()?;
        self.api.validate()?;
        self.storage.validate()?;
        self.validation.validate()?;
        Ok(())
    }

    /// Absolute path of the session storage directory.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.dir))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(file))),
            None => Ok(None),
        }
    }

    /// Full URL of the login endpoint.
    pub fn login_url(&self) -> String {
        format!(
            "{}{}",
            self.api.base_url.trim_end_matches('/'),
            self.api.login_path
        )
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  auth: key={}, token check={}, revalidate_on_login={}",
            self.auth.storage_key,
            if self.auth.jwt_secret.is_some() {
                "HS256"
            } else {
                "unverified"
            },
            self.auth.revalidate_on_login
        );
        info!(
            "  api: {} (timeout {}s)",
            self.login_url(),
            self.api.timeout_secs
        );
        info!("  storage: {}", self.storage.dir);
        info!(
            "  validation: min_password_length={}",
            self.validation.min_password_length
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Auth
        Self::apply_env_string("CLUB_AUTH_STORAGE_KEY", &mut self.auth.storage_key);
        Self::apply_env_option_string("CLUB_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_bool(
            "CLUB_AUTH_REVALIDATE_ON_LOGIN",
            &mut self.auth.revalidate_on_login,
        );

        // Api
        Self::apply_env_string("CLUB_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_string("CLUB_API_LOGIN_PATH", &mut self.api.login_path);
        Self::apply_env_parse("CLUB_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Storage
        Self::apply_env_string("CLUB_STORAGE_DIR", &mut self.storage.dir);

        // Validation
        Self::apply_env_parse(
            "CLUB_VALIDATION_MIN_PASSWORD_LENGTH",
            &mut self.validation.min_password_length,
        );

        // Logging
        Self::apply_env_parse("CLUB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CLUB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CLUB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

mod api_config;
mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;
mod validation_config;

pub use api_config::ApiConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;
pub use validation_config::ValidationConfig;

#[cfg(test)]
mod tests;

const DEFAULT_STORAGE_KEY: &str = "auth";
const DEFAULT_REVALIDATE_ON_LOGIN: bool = false;
const DEFAULT_STORAGE_DIRECTORY: &str = "storage";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const CONFIG_DIR_ENV: &str = "CLUB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".club";

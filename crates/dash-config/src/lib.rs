mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::{CommentRetention, SessionConfig};
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "DASH_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".dash";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";
const DEFAULT_STORAGE_DIR: &str = "storage";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;

mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;


pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "GB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".grind-breaker";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Folder created under the platform data directory when no override is set.
pub const APP_DATA_DIR_NAME: &str = "GrindBreaker";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

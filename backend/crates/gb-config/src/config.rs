use crate::{
    APP_DATA_DIR_NAME, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, LoggingConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for GB_CONFIG_DIR env var, else use ./.grind-breaker/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply GB_* environment variable overrides
    ///
    /// The config directory is not created here; a missing directory just
    /// means defaults. Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

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
    /// Priority: GB_CONFIG_DIR env var > ./.grind-breaker/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Directory holding the repository files.
    pub fn data_dir(&self) -> ConfigErrorResult<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => {
                let path = PathBuf::from(dir);
                if path.is_absolute() {
                    Ok(path)
                } else {
                    Ok(Self::config_dir()?.join(path))
                }
            }
            None => dirs::data_dir()
                .map(|base| base.join(APP_DATA_DIR_NAME))
                .ok_or(ConfigError::NoDataDir),
        }
    }

    /// Absolute path of the log file, or None when logging to stdout.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(file))),
            None => Ok(None),
        }
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        match self.data_dir() {
            Ok(dir) => info!("  storage: {}", dir.display()),
            Err(e) => info!("  storage: unresolved ({e})"),
        }
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_option_string("GB_DATA_DIR", &mut self.storage.data_dir);

        // Logging
        Self::apply_env_parse("GB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("GB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("GB_LOG_FILE", &mut self.logging.file);
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

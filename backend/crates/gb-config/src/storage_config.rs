use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Where profile.json and candidacies.json live. Relative paths resolve
    /// against the config directory; None uses the platform data directory.
    pub data_dir: Option<String>,
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(dir) = &self.data_dir
            && dir.trim().is_empty()
        {
            return Err(ConfigError::storage("storage.data_dir cannot be empty"));
        }

        Ok(())
    }
}

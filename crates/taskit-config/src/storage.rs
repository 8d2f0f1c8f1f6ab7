//! Where the persistent store keeps its files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding `tasks.json` and `categories.json`.
    /// Empty means the platform data directory.
    #[serde(default)]
    pub data_dir: String,
}

impl StorageConfig {
    /// Resolve the data directory, falling back to `<data_dir>/taskit`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if no directory is configured and
    /// the platform has no data directory.
    pub fn resolve_data_dir(&self) -> Result<PathBuf, ConfigError> {
        if !self.data_dir.is_empty() {
            return Ok(PathBuf::from(&self.data_dir));
        }
        dirs::data_dir()
            .map(|dir| dir.join("taskit"))
            .ok_or_else(|| {
                ConfigError::invalid(
                    "storage.data_dir",
                    "not set and no platform data directory is available",
                )
            })
    }
}

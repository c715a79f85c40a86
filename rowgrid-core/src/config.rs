//! Table configuration loading.
//!
//! All fields except `unlock_policy` are required. No defaults for dimensions.

use crate::{ConfigError, UnlockPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a table config file.
pub const CONFIG_ENV_VAR: &str = "ROWGRID_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    pub columns: usize,
    pub rows: usize,
    #[serde(default)]
    pub unlock_policy: UnlockPolicy,
}

impl TableConfig {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            unlock_policy: UnlockPolicy::Standard,
        }
    }

    pub fn with_unlock_policy(mut self, policy: UnlockPolicy) -> Self {
        self.unlock_policy = policy;
        self
    }

    /// Load from the first path argument, else `ROWGRID_CONFIG`.
    ///
    /// Returns `Ok(None)` when neither names a file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path_from_args().or_else(config_path_from_env) else {
            return Ok(None);
        };
        let config = Self::from_path(&path)?;
        Ok(Some(config))
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::InvalidValue {
                field: "columns",
                reason: "must be > 0".to_string(),
            });
        }
        if self.rows == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rows",
                reason: "must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_args() -> Option<PathBuf> {
    std::env::args_os().nth(1).map(PathBuf::from)
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from)
}

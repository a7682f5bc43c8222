//! Configuration types and parsing for ledgerline.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file names searched by [`Config::load_from_dir`], in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["ledgerline.yml", "ledgerline.yaml"];

/// Main configuration from ledgerline.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Target database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Ledger table placement
    #[serde(default)]
    pub journal: JournalConfig,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Database path (DuckDB file or :memory:)
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Where the ledger table lives in the target database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JournalConfig {
    /// Schema holding the ledger table; the connection default when absent
    #[serde(default)]
    pub schema: Option<String>,

    /// Ledger table name
    #[serde(default = "default_table")]
    pub table: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            schema: None,
            table: default_table(),
        }
    }
}

impl JournalConfig {
    /// Schema name with empty strings treated as absent
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref().filter(|s| !s.is_empty())
    }
}

/// Default path for an unconfigured database.
pub const DEFAULT_DB_PATH: &str = ":memory:";

/// Default ledger table name.
pub const DEFAULT_TABLE: &str = "SchemaVersions";

fn default_db_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for ledgerline.yml or ledgerline.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
            .map_or_else(
                || {
                    Err(CoreError::ConfigNotFound {
                        path: dir.join(CONFIG_FILE_NAMES[0]).display().to_string(),
                    })
                },
                |path| Self::load(&path),
            )
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        if self.database.path.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "database.path cannot be empty".to_string(),
            });
        }

        if self.journal.table.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "journal.table cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

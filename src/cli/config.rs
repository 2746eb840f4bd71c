//! Configuration file
//!
//! Example:
//!
//! ```json
//! {
//!   "database": { "user": "postgres", "password": "secret", "dbname": "products" },
//!   "http": { "port": 8010 },
//!   "expose_store_errors": false,
//!   "logging": { "level": "info", "format": "json" }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::observability::LogConfig;
use crate::store::PgStoreConfig;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// PostgreSQL connection settings (required unless serving in memory)
    #[serde(default)]
    pub database: Option<PgStoreConfig>,

    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Echo raw store error text in 500 responses (default: false)
    #[serde(default)]
    pub expose_store_errors: bool,

    /// Log level and format
    #[serde(default)]
    pub logging: LogConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if let Some(db) = &self.database {
            if db.user.is_empty() {
                return Err(CliError::config_error("database.user must not be empty"));
            }
            if db.dbname.is_empty() {
                return Err(CliError::config_error("database.dbname must not be empty"));
            }
            if db.port == 0 {
                return Err(CliError::config_error("database.port must be > 0"));
            }
        }

        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        Ok(())
    }

    /// Database settings, required for anything that talks to PostgreSQL
    pub fn database(&self) -> CliResult<&PgStoreConfig> {
        self.database
            .as_ref()
            .ok_or_else(|| CliError::config_error("Missing 'database' section in config"))
    }
}

//! CLI configuration loaded from TOML.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "qsweep.toml";

fn default_domain() -> String {
    "local".to_string()
}

fn default_watermark_db() -> String {
    "qsweep.db".to_string()
}

/// Top-level CLI configuration.
///
/// ```toml
/// domain = "wiki-en"
/// watermark_db = "qsweep.db"
///
/// [[queues]]
/// job_type = "refreshLinks"
/// seed = "fixtures/refresh_links.json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Logical partition (site/tenant) the configured queues belong to
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Path of the watermark database (`:memory:` for ephemeral)
    #[serde(default = "default_watermark_db")]
    pub watermark_db: String,

    /// Queues with a configured backend
    #[serde(default)]
    pub queues: Vec<QueueConfig>,
}

/// One configured queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Job type this queue holds
    pub job_type: String,

    /// Optional JSON fixture loaded into the abandoned set of the demo
    /// backend at startup
    #[serde(default)]
    pub seed: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            watermark_db: default_watermark_db(),
            queues: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist; with no path given, the default path is
    /// used when present and built-in defaults otherwise.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                if Path::new(DEFAULT_CONFIG_PATH).exists() {
                    Self::from_file(DEFAULT_CONFIG_PATH)
                } else {
                    tracing::warn!(
                        "No config file at '{}'; using default configuration",
                        DEFAULT_CONFIG_PATH
                    );
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Cannot read '{}': {}", path, e)))?;
        Ok(toml::from_str(&content)?)
    }
}

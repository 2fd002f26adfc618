//! CLI command implementations.

pub mod info;
pub mod query;

use anyhow::{Context, Result};
use mysqlite_core::MysqliteConfig;
use std::path::Path;
use tracing::{debug, warn};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "mysqlite.yaml";

/// Load the configuration from `path`, or from `./mysqlite.yaml` if it exists,
/// falling back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<MysqliteConfig> {
    match path {
        Some(path) => MysqliteConfig::load_with_context(path)
            .with_context(|| format!("Failed to load configuration from {:?}", path)),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                debug!(config = %default_path.display(), "Using config from working directory");
                MysqliteConfig::load_with_context(default_path).with_context(|| {
                    format!("Failed to load configuration from {:?}", default_path)
                })
            } else {
                warn!("No config file found, using defaults");
                Ok(MysqliteConfig::default())
            }
        }
    }
}

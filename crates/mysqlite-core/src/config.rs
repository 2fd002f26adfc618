//! Configuration types for mysqlite.
//!
//! Configuration is read from a YAML file (usually `mysqlite.yaml`):
//!
//! ```yaml
//! database: app.db
//! attach:
//!   - name: analytics
//!     path: analytics.db
//! information_schema:
//!   default_schema: main
//! output:
//!   format: table
//! ```
//!
//! Every field is optional; a missing file section falls back to its default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Complete mysqlite configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MysqliteConfig {
    /// SQLite database file opened by the CLI when none is given on the command line.
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Additional database files to attach before queries run.
    #[serde(default)]
    pub attach: Vec<AttachConfig>,

    /// Settings for the emulated `information_schema` views.
    #[serde(default)]
    pub information_schema: InformationSchemaConfig,

    /// Result rendering.
    #[serde(default)]
    pub output: OutputConfig,
}

/// A database attached under a schema name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttachConfig {
    /// Schema name used in `ATTACH ... AS <name>`.
    pub name: String,
    /// Database file path. Relative paths resolve against the config file directory.
    pub path: PathBuf,
}

/// Settings for the `information_schema.tables` / `information_schema.columns` views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InformationSchemaConfig {
    /// Schema label reported in `table_schema` when the virtual table is
    /// connected without an explicit schema argument.
    #[serde(default = "default_schema")]
    pub default_schema: String,
}

impl Default for InformationSchemaConfig {
    fn default() -> Self {
        Self {
            default_schema: default_schema(),
        }
    }
}

impl InformationSchemaConfig {
    /// Create a configuration that labels rows with `main`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different default schema label.
    pub fn with_default_schema(mut self, schema: impl Into<String>) -> Self {
        self.default_schema = schema.into();
        self
    }
}

/// Output settings for the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How query results are printed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text columns.
    #[default]
    Table,
    /// One JSON object per row.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::Config(format!(
                "unknown output format '{}' (expected 'table' or 'json')",
                other
            ))),
        }
    }
}

fn default_schema() -> String {
    "main".to_string()
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MysqliteConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration and resolve relative paths against the file's directory.
    pub fn load_with_context(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = Self::from_file(path)?;

        let base_dir = path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        config.resolve_paths(&base_dir);

        Ok(config)
    }

    /// Make `database` and every attach path absolute relative to `base_dir`.
    pub fn resolve_paths(&mut self, base_dir: &Path) {
        if let Some(database) = &self.database {
            if database.is_relative() && !is_memory_path(database) {
                self.database = Some(base_dir.join(database));
            }
        }

        for attach in &mut self.attach {
            if attach.path.is_relative() && !is_memory_path(&attach.path) {
                attach.path = base_dir.join(&attach.path);
            }
        }
    }

    /// Check the configuration for values SQLite would reject later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.information_schema.default_schema.trim().is_empty() {
            return Err(ConfigError::Config(
                "information_schema.default_schema must not be empty".to_string(),
            ));
        }

        let mut seen: Vec<String> = Vec::new();
        for attach in &self.attach {
            let name = attach.name.trim().to_ascii_lowercase();
            if name.is_empty() {
                return Err(ConfigError::Config(
                    "attach entries require a non-empty name".to_string(),
                ));
            }
            if name == "main" || name == "temp" {
                return Err(ConfigError::Config(format!(
                    "cannot attach a database as reserved schema '{}'",
                    attach.name
                )));
            }
            if seen.contains(&name) {
                return Err(ConfigError::Config(format!(
                    "schema '{}' is attached more than once",
                    attach.name
                )));
            }
            seen.push(name);
        }

        Ok(())
    }
}

fn is_memory_path(path: &Path) -> bool {
    path.as_os_str() == ":memory:"
}

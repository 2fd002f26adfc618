//! # mysqlite-core
//!
//! Configuration types shared by the mysqlite crates.
//!
//! The configuration is loaded from a single YAML file (`mysqlite.yaml`) and
//! controls which SQLite database is opened, which extra databases are
//! attached, and how the `information_schema` views label their rows.

// Configuration types shared across all mysqlite crates
pub mod config;

pub use config::{
    AttachConfig, ConfigError, InformationSchemaConfig, MysqliteConfig, OutputConfig,
    OutputFormat,
};

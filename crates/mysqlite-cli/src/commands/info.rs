//! `mysqlite info` - print the extension version.

use anyhow::{Context, Result};
use mysqlite_core::InformationSchemaConfig;
use rusqlite::Connection;

/// Evaluate `mysqlite_info()` on a throwaway in-memory database.
pub fn version() -> Result<String> {
    let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
    mysqlite_schema::register(&conn, &InformationSchemaConfig::default())?;
    let info = conn
        .query_row("SELECT mysqlite_info()", [], |row| row.get(0))
        .context("Failed to evaluate mysqlite_info()")?;
    Ok(info)
}

pub fn run() -> Result<()> {
    println!("{}", version()?);
    Ok(())
}

//! Query commands.
//!
//! `mysqlite query` - Run arbitrary SQL with the views registered.
//! `mysqlite tables` - Shortcut over `information_schema.tables`.
//! `mysqlite columns` - Shortcut over `information_schema.columns`.

use crate::output::{self, QueryOutput};
use anyhow::{Context, Result};
use mysqlite_core::{MysqliteConfig, OutputFormat};
use rusqlite::types::Value;
use rusqlite::{Connection, ToSql};
use std::path::Path;
use tracing::{debug, info};

const TABLES_SQL: &str =
    "SELECT table_schema, table_name, table_type FROM \"information_schema.tables\"";

const COLUMNS_SQL: &str = "SELECT table_name, column_name, ordinal_position, data_type, \
     is_nullable, column_key, column_default FROM \"information_schema.columns\"";

/// Open the database, attach configured schemas and register the extension.
pub fn open_database(config: &MysqliteConfig, database: Option<&Path>) -> Result<Connection> {
    let path = database
        .map(Path::to_path_buf)
        .or_else(|| config.database.clone())
        .context("No database given; pass --db or set `database` in mysqlite.yaml")?;

    let conn = Connection::open(&path)
        .with_context(|| format!("Failed to open database {}", path.display()))?;

    for attach in &config.attach {
        conn.execute(
            "ATTACH DATABASE ?1 AS ?2",
            [&*attach.path.to_string_lossy(), attach.name.as_str()],
        )
        .with_context(|| {
            format!(
                "Failed to attach {} as {}",
                attach.path.display(),
                attach.name
            )
        })?;
        debug!(schema = %attach.name, path = %attach.path.display(), "Attached database");
    }

    mysqlite_schema::register(&conn, &config.information_schema)
        .context("Failed to register information_schema modules")?;

    info!(
        database = %path.display(),
        default_schema = %config.information_schema.default_schema,
        "Database ready"
    );

    Ok(conn)
}

/// Run `sql` and collect every row.
pub fn execute(conn: &Connection, sql: &str, params: &[&dyn ToSql]) -> Result<QueryOutput> {
    let mut stmt = conn
        .prepare(sql)
        .with_context(|| format!("Failed to prepare query: {}", sql))?;

    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(String::from)
        .collect();
    let width = columns.len();

    let rows = stmt
        .query_map(params, |row| {
            (0..width)
                .map(|i| row.get::<_, Value>(i))
                .collect::<rusqlite::Result<Vec<Value>>>()
        })
        .context("Query failed")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Query failed")?;

    Ok(QueryOutput { columns, rows })
}

fn print(config: &MysqliteConfig, result: &QueryOutput, format: Option<OutputFormat>) -> Result<()> {
    let format = format.unwrap_or(config.output.format);
    println!("{}", output::render(result, format)?);
    Ok(())
}

/// `mysqlite query`
pub fn run(
    config: &MysqliteConfig,
    database: Option<&Path>,
    sql: &str,
    format: Option<OutputFormat>,
) -> Result<()> {
    let conn = open_database(config, database)?;
    let result = execute(&conn, sql, &[])?;
    print(config, &result, format)
}

/// `mysqlite tables`
pub fn tables(
    config: &MysqliteConfig,
    database: Option<&Path>,
    schema: Option<String>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let config = with_schema(config, schema);
    let conn = open_database(&config, database)?;
    let result = execute(&conn, TABLES_SQL, &[])?;
    print(&config, &result, format)
}

/// `mysqlite columns`
pub fn columns(
    config: &MysqliteConfig,
    database: Option<&Path>,
    table: Option<&str>,
    schema: Option<String>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let config = with_schema(config, schema);
    let conn = open_database(&config, database)?;
    let result = columns_of(&conn, table)?;
    print(&config, &result, format)
}

fn columns_of(conn: &Connection, table: Option<&str>) -> Result<QueryOutput> {
    match table {
        Some(table) => execute(
            conn,
            &format!("{} WHERE table_name = ?1", COLUMNS_SQL),
            &[&table],
        ),
        None => execute(conn, COLUMNS_SQL, &[]),
    }
}

fn with_schema(config: &MysqliteConfig, schema: Option<String>) -> MysqliteConfig {
    let mut config = config.clone();
    if let Some(schema) = schema {
        config.information_schema.default_schema = schema;
    }
    config
}

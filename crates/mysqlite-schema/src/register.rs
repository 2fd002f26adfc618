//! Extension registration.
//!
//! Registers both `information_schema` modules and the `mysqlite_info()`
//! scalar function on a connection.

use crate::error::SchemaError;
use crate::information_schema::{ColumnsView, InformationSchemaTab, InformationView, TablesView};
use mysqlite_core::InformationSchemaConfig;
use rusqlite::Connection;
use rusqlite::functions::FunctionFlags;
use rusqlite::vtab::eponymous_only_module;

/// Name of the version-info scalar function.
pub const INFO_FUNCTION: &str = "mysqlite_info";

/// Value returned by `mysqlite_info()`.
pub fn info() -> String {
    format!("mysqlite {}", env!("CARGO_PKG_VERSION"))
}

/// Register the `information_schema.tables` and `information_schema.columns`
/// modules plus `mysqlite_info()` on `conn`.
///
/// The modules are eponymous-only (queried directly, never created with
/// `CREATE VIRTUAL TABLE`) and read-only.
pub fn register(conn: &Connection, config: &InformationSchemaConfig) -> Result<(), SchemaError> {
    register_view::<TablesView>(conn, config)?;
    register_view::<ColumnsView>(conn, config)?;

    conn.create_scalar_function(
        INFO_FUNCTION,
        0,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |_| Ok(info()),
    )
    .map_err(|source| SchemaError::Registration {
        module: INFO_FUNCTION.to_string(),
        source,
    })?;

    tracing::debug!(
        default_schema = %config.default_schema,
        modules = ?[TablesView::MODULE_NAME, ColumnsView::MODULE_NAME],
        "Registered information_schema extension"
    );

    Ok(())
}

fn register_view<V: InformationView>(
    conn: &Connection,
    config: &InformationSchemaConfig,
) -> Result<(), SchemaError> {
    conn.create_module(
        V::MODULE_NAME,
        eponymous_only_module::<InformationSchemaTab<V>>(),
        Some(config.clone()),
    )
    .map_err(|source| SchemaError::Registration {
        module: V::MODULE_NAME.to_string(),
        source,
    })
}

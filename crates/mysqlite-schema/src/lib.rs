//! # mysqlite-schema
//!
//! MySQL-compatible `information_schema` views for SQLite.
//!
//! Tools written against MySQL's `information_schema.tables` and
//! `information_schema.columns` can run unmodified against a SQLite database
//! once this crate's modules are registered on the connection:
//!
//! ```no_run
//! use mysqlite_core::InformationSchemaConfig;
//! use rusqlite::Connection;
//!
//! let conn = Connection::open("app.db")?;
//! mysqlite_schema::register(&conn, &InformationSchemaConfig::default())?;
//!
//! let mut stmt = conn.prepare(
//!     "SELECT table_name, column_name, column_key FROM \"information_schema.columns\"",
//! )?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## What SQLite cannot answer
//!
//! Columns MySQL fills from storage-engine statistics (row counts, lengths,
//! timestamps, checksums) are NULL. Engine, row format, character set,
//! collation and privileges are fixed constants so the views keep MySQL's exact
//! column layout.

pub mod error;
pub mod information_schema;
pub mod register;

pub use error::SchemaError;
pub use information_schema::{
    Catalog, ColumnRecord, ColumnsView, InformationView, RowCursor, TableRecord, TableType,
    TablesView,
};
pub use register::{INFO_FUNCTION, info, register};

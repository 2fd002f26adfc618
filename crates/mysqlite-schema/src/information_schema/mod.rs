//! MySQL-shaped `information_schema` views over the SQLite catalog.
//!
//! Two eponymous, read-only virtual tables are provided:
//!
//! | Module | Rows |
//! |--------|------|
//! | `information_schema.tables` | One per table or view (`BASE TABLE` / `VIEW`) |
//! | `information_schema.columns` | One per column of every table or view |
//!
//! Both follow the same pipeline: the virtual table declares a fixed column
//! layout, `Filter` runs the catalog queries and materializes the rows, and
//! `Next` / `Column` walk the materialized sequence.
//!
//! ## Example
//!
//! ```text
//! sqlite> SELECT table_name, table_type FROM "information_schema.tables";
//! t1|BASE TABLE
//! v1|VIEW
//! ```

mod catalog;
mod columns;
mod cursor;
mod dispatch;
mod records;
mod tables;
mod vtab;

pub use catalog::{Catalog, quote_identifier};
pub use columns::{ColumnsCursor, ColumnsTab, ColumnsView};
pub use cursor::{EOF_ROWID, RowCursor};
pub use dispatch::{
    CATALOG_NAME, CHARACTER_SET, COLLATION, COLUMNS_COLUMNS, CellValue, ColumnSpec, ENGINE_NAME,
    PRIVILEGES, ROW_FORMAT, SqlType, TABLE_VERSION, TABLES_COLUMNS, cell, declare_sql,
};
pub use records::{ColumnRecord, TableRecord, TableType};
pub use tables::{TablesCursor, TablesTab, TablesView};
pub use vtab::{InformationSchemaCursor, InformationSchemaTab, InformationView, resolve_schema_name};

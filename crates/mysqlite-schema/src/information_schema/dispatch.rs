//! Output column layouts for the emulated views.
//!
//! Each view is a fixed, ordered table of [`ColumnSpec`]s. The position of a
//! spec is the column index the host engine asks for, its name and type make up
//! the declared schema, and its `value` function maps a row record to the cell.
//! Columns SQLite has no equivalent for are constants or NULL; they are never
//! dropped or reordered, since MySQL tooling addresses them by position.

use super::records::{ColumnRecord, TableRecord};
use rusqlite::ToSql;
use rusqlite::types::{ToSqlOutput, Value, ValueRef};

/// `table_catalog` is always `def` in MySQL.
pub const CATALOG_NAME: &str = "def";
/// Reported in `information_schema.tables.engine`.
pub const ENGINE_NAME: &str = "SQLite";
/// Reported in `information_schema.tables.version`.
pub const TABLE_VERSION: i64 = 10;
/// Reported in `information_schema.tables.row_format`.
pub const ROW_FORMAT: &str = "Dynamic";
pub const CHARACTER_SET: &str = "utf8mb4";
pub const COLLATION: &str = "utf8mb4_general_ci";
pub const PRIVILEGES: &str = "select,insert,update,references";

/// A single output cell, borrowing text from the row record where possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue<'a> {
    Null,
    Integer(i64),
    Text(&'a str),
}

impl ToSql for CellValue<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match *self {
            CellValue::Null => ToSqlOutput::Owned(Value::Null),
            CellValue::Integer(i) => ToSqlOutput::Owned(Value::Integer(i)),
            CellValue::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

/// Declared SQL type of an output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Text,
    Integer,
}

impl SqlType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlType::Text => "TEXT",
            SqlType::Integer => "INTEGER",
        }
    }
}

/// One output column: name, declared type and the function producing its value.
pub struct ColumnSpec<R> {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub value: fn(&R) -> CellValue<'_>,
}

/// Render the `CREATE TABLE` statement handed to `sqlite3_declare_vtab`.
pub fn declare_sql<R>(specs: &[ColumnSpec<R>]) -> String {
    let columns: Vec<String> = specs
        .iter()
        .map(|spec| format!("{} {}", spec.name, spec.sql_type.as_str()))
        .collect();
    format!("CREATE TABLE x({})", columns.join(", "))
}

/// Value of column `index` for `row`; NULL for an index outside the layout.
pub fn cell<'r, R>(specs: &[ColumnSpec<R>], row: &'r R, index: usize) -> CellValue<'r> {
    specs
        .get(index)
        .map_or(CellValue::Null, |spec| (spec.value)(row))
}

/// `information_schema.tables`, 21 columns.
pub static TABLES_COLUMNS: [ColumnSpec<TableRecord>; 21] = [
    ColumnSpec { name: "table_catalog", sql_type: SqlType::Text, value: |_| CellValue::Text(CATALOG_NAME) },
    ColumnSpec { name: "table_schema", sql_type: SqlType::Text, value: |t| CellValue::Text(&t.schema) },
    ColumnSpec { name: "table_name", sql_type: SqlType::Text, value: |t| CellValue::Text(&t.name) },
    ColumnSpec { name: "table_type", sql_type: SqlType::Text, value: |t| CellValue::Text(t.table_type.as_str()) },
    ColumnSpec { name: "engine", sql_type: SqlType::Text, value: |_| CellValue::Text(ENGINE_NAME) },
    ColumnSpec { name: "version", sql_type: SqlType::Integer, value: |_| CellValue::Integer(TABLE_VERSION) },
    ColumnSpec { name: "row_format", sql_type: SqlType::Text, value: |_| CellValue::Text(ROW_FORMAT) },
    ColumnSpec { name: "table_rows", sql_type: SqlType::Integer, value: |_| CellValue::Null },
    ColumnSpec { name: "avg_row_length", sql_type: SqlType::Integer, value: |_| CellValue::Null },
    ColumnSpec { name: "data_length", sql_type: SqlType::Integer, value: |_| CellValue::Null },
    ColumnSpec { name: "max_data_length", sql_type: SqlType::Integer, value: |_| CellValue::Null },
    ColumnSpec { name: "index_length", sql_type: SqlType::Integer, value: |_| CellValue::Null },
    ColumnSpec { name: "data_free", sql_type: SqlType::Integer, value: |_| CellValue::Null },
    ColumnSpec { name: "auto_increment", sql_type: SqlType::Integer, value: |_| CellValue::Null },
    ColumnSpec { name: "create_time", sql_type: SqlType::Text, value: |_| CellValue::Null },
    ColumnSpec { name: "update_time", sql_type: SqlType::Text, value: |_| CellValue::Null },
    ColumnSpec { name: "check_time", sql_type: SqlType::Text, value: |_| CellValue::Null },
    ColumnSpec { name: "table_collation", sql_type: SqlType::Text, value: |_| CellValue::Text(COLLATION) },
    ColumnSpec { name: "checksum", sql_type: SqlType::Text, value: |_| CellValue::Null },
    ColumnSpec { name: "create_options", sql_type: SqlType::Text, value: |_| CellValue::Text("") },
    ColumnSpec { name: "table_comment", sql_type: SqlType::Text, value: |_| CellValue::Text("") },
];

/// `information_schema.columns`, 22 columns.
pub static COLUMNS_COLUMNS: [ColumnSpec<ColumnRecord>; 22] = [
    ColumnSpec { name: "table_catalog", sql_type: SqlType::Text, value: |_| CellValue::Text(CATALOG_NAME) },
    ColumnSpec { name: "table_schema", sql_type: SqlType::Text, value: |c| CellValue::Text(&c.schema) },
    ColumnSpec { name: "table_name", sql_type: SqlType::Text, value: |c| CellValue::Text(&c.table_name) },
    ColumnSpec { name: "column_name", sql_type: SqlType::Text, value: |c| CellValue::Text(&c.column_name) },
    ColumnSpec { name: "ordinal_position", sql_type: SqlType::Integer, value: |c| CellValue::Integer(c.ordinal_position) },
    ColumnSpec {
        name: "column_default",
        sql_type: SqlType::Text,
        value: |c| c.default_value.as_deref().map_or(CellValue::Null, CellValue::Text),
    },
    ColumnSpec { name: "is_nullable", sql_type: SqlType::Text, value: |c| CellValue::Text(c.nullable_marker()) },
    ColumnSpec { name: "data_type", sql_type: SqlType::Text, value: |c| CellValue::Text(&c.declared_type) },
    ColumnSpec { name: "character_maximum_length", sql_type: SqlType::Integer, value: |_| CellValue::Null },
    ColumnSpec { name: "character_octet_length", sql_type: SqlType::Integer, value: |_| CellValue::Null },
    ColumnSpec { name: "numeric_precision", sql_type: SqlType::Integer, value: |_| CellValue::Null },
    ColumnSpec { name: "numeric_scale", sql_type: SqlType::Integer, value: |_| CellValue::Null },
    ColumnSpec { name: "datetime_precision", sql_type: SqlType::Integer, value: |_| CellValue::Null },
    ColumnSpec { name: "character_set_name", sql_type: SqlType::Text, value: |_| CellValue::Text(CHARACTER_SET) },
    ColumnSpec { name: "collation_name", sql_type: SqlType::Text, value: |_| CellValue::Text(COLLATION) },
    ColumnSpec { name: "column_type", sql_type: SqlType::Text, value: |c| CellValue::Text(&c.declared_type) },
    ColumnSpec { name: "column_key", sql_type: SqlType::Text, value: |c| CellValue::Text(c.key_marker()) },
    ColumnSpec { name: "extra", sql_type: SqlType::Text, value: |_| CellValue::Text("") },
    ColumnSpec { name: "privileges", sql_type: SqlType::Text, value: |_| CellValue::Text(PRIVILEGES) },
    ColumnSpec { name: "column_comment", sql_type: SqlType::Text, value: |_| CellValue::Text("") },
    ColumnSpec { name: "generation_expression", sql_type: SqlType::Text, value: |_| CellValue::Null },
    ColumnSpec { name: "srs_id", sql_type: SqlType::Integer, value: |_| CellValue::Null },
];

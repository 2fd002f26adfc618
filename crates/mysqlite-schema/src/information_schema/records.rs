//! Row records materialized by the information_schema cursors.
//!
//! Records are built once per `Filter` call and never mutated afterwards.

use std::fmt;

/// Kind of relation reported in `information_schema.tables.table_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableType {
    /// A stored table (`BASE TABLE`).
    BaseTable,
    /// A view (`VIEW`).
    View,
}

impl TableType {
    /// Map a `sqlite_master.type` token (`table` or `view`) to the MySQL
    /// vocabulary. The catalog query only selects those two kinds.
    pub fn from_catalog(kind: &str) -> TableType {
        if kind.eq_ignore_ascii_case("view") {
            TableType::View
        } else {
            TableType::BaseTable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TableType::BaseTable => "BASE TABLE",
            TableType::View => "VIEW",
        }
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of `information_schema.tables`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRecord {
    /// Schema label reported in `table_schema`.
    pub schema: String,
    pub name: String,
    pub table_type: TableType,
}

/// One row of `information_schema.columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRecord {
    /// Schema label reported in `table_schema`.
    pub schema: String,
    pub table_name: String,
    pub column_name: String,
    /// 1-based position of the column in its table.
    pub ordinal_position: i64,
    /// Default expression as declared, `None` when the column has no default.
    pub default_value: Option<String>,
    pub is_nullable: bool,
    /// Declared type exactly as written in the table definition (may be empty).
    pub declared_type: String,
    pub is_primary_key: bool,
}

impl ColumnRecord {
    /// `is_nullable` as the `YES` / `NO` marker MySQL uses.
    pub fn nullable_marker(&self) -> &'static str {
        if self.is_nullable { "YES" } else { "NO" }
    }

    /// `column_key` marker: `PRI` for primary key members, empty otherwise.
    pub fn key_marker(&self) -> &'static str {
        if self.is_primary_key { "PRI" } else { "" }
    }
}

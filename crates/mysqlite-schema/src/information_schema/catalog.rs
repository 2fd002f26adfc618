//! Introspection of SQLite's own catalog.
//!
//! Relations come from `<schema>.sqlite_master`, columns from the
//! `pragma_table_info` table-valued function. Table and schema names reach
//! `pragma_table_info` as bound parameters, so names containing quotes or
//! other special characters never end up spliced into SQL text.

use super::records::{ColumnRecord, TableRecord, TableType};
use crate::error::SchemaError;
use rusqlite::Connection;

const SCHEMA_EXISTS_SQL: &str =
    "SELECT 1 FROM pragma_database_list WHERE name = ?1 COLLATE NOCASE";

const TABLE_INFO_SQL: &str = "SELECT cid, name, type, \"notnull\", dflt_value, pk \
     FROM pragma_table_info(?1, ?2) ORDER BY cid";

/// Quote `name` as an SQL identifier, doubling embedded double quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn relations_sql(schema: &str) -> String {
    format!(
        "SELECT name, type FROM {}.sqlite_master \
         WHERE type IN ('table', 'view') AND name NOT LIKE 'sqlite_%'",
        quote_identifier(schema)
    )
}

/// Read-only view of the catalog reachable through a connection.
pub struct Catalog<'conn> {
    conn: &'conn Connection,
}

impl<'conn> Catalog<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Whether `schema` is `main`, `temp` or an attached database.
    pub fn has_schema(&self, schema: &str) -> Result<bool, SchemaError> {
        let mut stmt = self
            .conn
            .prepare(SCHEMA_EXISTS_SQL)
            .map_err(|e| introspection(schema, e))?;
        stmt.exists([schema]).map_err(|e| introspection(schema, e))
    }

    /// Tables and views of `schema` in catalog scan order, internal
    /// `sqlite_%` objects excluded. An unknown schema yields no rows.
    pub fn list_relations(&self, schema: &str) -> Result<Vec<TableRecord>, SchemaError> {
        if !self.has_schema(schema)? {
            tracing::debug!(schema = %schema, "Schema not attached, no relations to list");
            return Ok(Vec::new());
        }

        let mut stmt = self
            .conn
            .prepare(&relations_sql(schema))
            .map_err(|e| introspection(schema, e))?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
            .map_err(|e| introspection(schema, e))?;

        let mut relations = Vec::new();
        for row in rows {
            let (name, kind) = row.map_err(|e| introspection(schema, e))?;
            relations.push(TableRecord {
                schema: schema.to_string(),
                name,
                table_type: TableType::from_catalog(&kind),
            });
        }

        Ok(relations)
    }

    /// Columns of a single relation in declaration order.
    ///
    /// `pragma_table_info` omits generated columns, so they never appear here
    /// and `generation_expression` is always NULL.
    pub fn table_columns(
        &self,
        schema: &str,
        table: &str,
    ) -> Result<Vec<ColumnRecord>, SchemaError> {
        tracing::trace!(schema = %schema, table = %table, "Introspecting columns");

        let mut stmt = self
            .conn
            .prepare(TABLE_INFO_SQL)
            .map_err(|e| introspection(schema, e))?;
        let rows = stmt
            .query_map([table, schema], |row| {
                let cid: i64 = row.get(0)?;
                let notnull: i64 = row.get(3)?;
                let pk: i64 = row.get(5)?;
                Ok(ColumnRecord {
                    schema: schema.to_string(),
                    table_name: table.to_string(),
                    column_name: row.get(1)?,
                    ordinal_position: cid + 1,
                    default_value: row.get(4)?,
                    // A primary key column is reported as NOT NULL even though
                    // SQLite only enforces that for INTEGER PRIMARY KEY.
                    is_nullable: notnull == 0 && pk == 0,
                    declared_type: row.get(2)?,
                    is_primary_key: pk > 0,
                })
            })
            .map_err(|e| introspection(schema, e))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| introspection(schema, e))
    }

    /// Columns of every relation in `schema`, grouped by relation in catalog
    /// scan order.
    pub fn list_columns(&self, schema: &str) -> Result<Vec<ColumnRecord>, SchemaError> {
        let mut columns = Vec::new();
        for relation in self.list_relations(schema)? {
            columns.extend(self.table_columns(schema, &relation.name)?);
        }
        Ok(columns)
    }
}

fn introspection(schema: &str, source: rusqlite::Error) -> SchemaError {
    SchemaError::Introspection {
        schema: schema.to_string(),
        source,
    }
}

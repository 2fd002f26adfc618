//! SQLite virtual table plumbing shared by both views.
//!
//! A view only has to say what its rows look like ([`InformationView`]); the
//! module, the virtual table and the cursor are the same for every view.

use super::catalog::Catalog;
use super::cursor::RowCursor;
use super::dispatch::{CellValue, ColumnSpec, cell, declare_sql};
use crate::error::SchemaError;
use mysqlite_core::InformationSchemaConfig;
use rusqlite::vtab::{
    Context, Filters, IndexInfo, VTab, VTabConnection, VTabCursor, sqlite3_vtab,
    sqlite3_vtab_cursor,
};
use rusqlite::{Connection, ffi};
use std::marker::PhantomData;
use std::os::raw::c_int;

/// Cost reported for the only plan we offer: a full catalog scan.
const FULL_SCAN_COST: f64 = 1_000_000.0;

/// Position of the optional schema argument in the module arguments
/// (after module name, database name and table name).
const SCHEMA_ARG_INDEX: usize = 3;

/// An emulated `information_schema` view.
pub trait InformationView: 'static {
    /// Module name the view is registered under.
    const MODULE_NAME: &'static str;

    /// Row record materialized by the cursor.
    type Record;

    /// Output layout, in declared column order.
    fn columns() -> &'static [ColumnSpec<Self::Record>];

    /// Read every row of the view for `schema`.
    fn introspect(catalog: &Catalog<'_>, schema: &str)
    -> Result<Vec<Self::Record>, SchemaError>;
}

/// Schema label for a connecting virtual table: the fourth module argument
/// verbatim when present, otherwise `default`.
pub fn resolve_schema_name(args: &[&[u8]], default: &str) -> String {
    args.get(SCHEMA_ARG_INDEX)
        .map(|arg| String::from_utf8_lossy(arg).into_owned())
        .unwrap_or_else(|| default.to_string())
}

/// Virtual table bound to one schema label.
#[repr(C)]
pub struct InformationSchemaTab<V> {
    base: sqlite3_vtab,
    db: *mut ffi::sqlite3,
    schema: String,
    view: PhantomData<V>,
}

unsafe impl<'vtab, V: InformationView> VTab<'vtab> for InformationSchemaTab<V> {
    type Aux = InformationSchemaConfig;
    type Cursor = InformationSchemaCursor<'vtab, V>;

    fn connect(
        db: &mut VTabConnection,
        aux: Option<&Self::Aux>,
        args: &[&[u8]],
    ) -> rusqlite::Result<(String, Self)> {
        let default_schema = aux
            .map(|config| config.default_schema.clone())
            .unwrap_or_else(|| InformationSchemaConfig::default().default_schema);
        let schema = resolve_schema_name(args, &default_schema);

        tracing::debug!(module = V::MODULE_NAME, schema = %schema, "Connecting virtual table");

        // SAFETY: the handle outlives every virtual table created on it.
        let db = unsafe { db.handle() };

        Ok((
            declare_sql(V::columns()),
            Self {
                base: sqlite3_vtab::default(),
                db,
                schema,
                view: PhantomData,
            },
        ))
    }

    fn best_index(&self, info: &mut IndexInfo) -> rusqlite::Result<()> {
        // No constraint is consumed and no ordering is promised.
        info.set_idx_num(0);
        info.set_estimated_cost(FULL_SCAN_COST);
        Ok(())
    }

    fn open(&'vtab mut self) -> rusqlite::Result<InformationSchemaCursor<'vtab, V>> {
        Ok(InformationSchemaCursor::new(self))
    }
}

/// Cursor over one activation's worth of rows.
#[repr(C)]
pub struct InformationSchemaCursor<'vtab, V: InformationView> {
    base: sqlite3_vtab_cursor,
    db: *mut ffi::sqlite3,
    schema: String,
    rows: RowCursor<V::Record>,
    phantom: PhantomData<&'vtab InformationSchemaTab<V>>,
}

impl<V: InformationView> InformationSchemaCursor<'_, V> {
    fn new(table: &InformationSchemaTab<V>) -> Self {
        Self {
            base: sqlite3_vtab_cursor::default(),
            db: table.db,
            schema: table.schema.clone(),
            rows: RowCursor::new(),
            phantom: PhantomData,
        }
    }

    fn introspect(&self) -> Result<Vec<V::Record>, SchemaError> {
        // SAFETY: the handle belongs to the connection running this query; the
        // wrapper does not close it on drop.
        let conn = unsafe { Connection::from_handle(self.db) }?;
        V::introspect(&Catalog::new(&conn), &self.schema)
    }
}

unsafe impl<V: InformationView> VTabCursor for InformationSchemaCursor<'_, V> {
    fn filter(
        &mut self,
        _idx_num: c_int,
        _idx_str: Option<&str>,
        _args: &Filters<'_>,
    ) -> rusqlite::Result<()> {
        match self.introspect() {
            Ok(records) => {
                tracing::debug!(
                    module = V::MODULE_NAME,
                    schema = %self.schema,
                    rows = records.len(),
                    "Materialized catalog rows"
                );
                self.rows.load(records);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(module = V::MODULE_NAME, schema = %self.schema, error = %err, "Catalog introspection failed");
                self.rows.close();
                Err(err.into())
            }
        }
    }

    fn next(&mut self) -> rusqlite::Result<()> {
        self.rows.advance();
        Ok(())
    }

    fn eof(&self) -> bool {
        self.rows.is_eof()
    }

    fn column(&self, ctx: &mut Context, i: c_int) -> rusqlite::Result<()> {
        let value = match (self.rows.current(), usize::try_from(i)) {
            (Some(row), Ok(index)) => cell(V::columns(), row, index),
            _ => CellValue::Null,
        };
        ctx.set_result(&value)
    }

    fn rowid(&self) -> rusqlite::Result<i64> {
        Ok(self.rows.rowid())
    }
}

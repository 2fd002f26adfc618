//! `information_schema.columns`.

use super::catalog::Catalog;
use super::dispatch::{COLUMNS_COLUMNS, ColumnSpec};
use super::records::ColumnRecord;
use super::vtab::{InformationSchemaCursor, InformationSchemaTab, InformationView};
use crate::error::SchemaError;

/// One row per column of every table or view of the labelled schema.
///
/// Columns are listed relation by relation (one `pragma_table_info` query per
/// relation), each relation's columns contiguous and in declaration order.
pub struct ColumnsView;

impl InformationView for ColumnsView {
    const MODULE_NAME: &'static str = "information_schema.columns";

    type Record = ColumnRecord;

    fn columns() -> &'static [ColumnSpec<ColumnRecord>] {
        &COLUMNS_COLUMNS
    }

    fn introspect(catalog: &Catalog<'_>, schema: &str) -> Result<Vec<ColumnRecord>, SchemaError> {
        catalog.list_columns(schema)
    }
}

pub type ColumnsTab = InformationSchemaTab<ColumnsView>;
pub type ColumnsCursor<'vtab> = InformationSchemaCursor<'vtab, ColumnsView>;

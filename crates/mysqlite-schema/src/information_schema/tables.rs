//! `information_schema.tables`.

use super::catalog::Catalog;
use super::dispatch::{ColumnSpec, TABLES_COLUMNS};
use super::records::TableRecord;
use super::vtab::{InformationSchemaCursor, InformationSchemaTab, InformationView};
use crate::error::SchemaError;

/// One row per table or view of the labelled schema.
pub struct TablesView;

impl InformationView for TablesView {
    const MODULE_NAME: &'static str = "information_schema.tables";

    type Record = TableRecord;

    fn columns() -> &'static [ColumnSpec<TableRecord>] {
        &TABLES_COLUMNS
    }

    fn introspect(catalog: &Catalog<'_>, schema: &str) -> Result<Vec<TableRecord>, SchemaError> {
        catalog.list_relations(schema)
    }
}

pub type TablesTab = InformationSchemaTab<TablesView>;
pub type TablesCursor<'vtab> = InformationSchemaCursor<'vtab, TablesView>;

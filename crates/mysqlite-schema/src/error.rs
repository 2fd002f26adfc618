//! Error types for the information_schema crate.

use thiserror::Error;

/// Errors that can occur while registering or querying the
/// `information_schema` virtual tables.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The host engine rejected a module or function registration.
    #[error("failed to register {module}: {source}")]
    Registration {
        module: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A catalog query against the embedded engine failed.
    #[error("failed to introspect schema {schema}: {source}")]
    Introspection {
        schema: String,
        #[source]
        source: rusqlite::Error,
    },

    /// SQLite error outside of introspection.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl From<SchemaError> for rusqlite::Error {
    /// Virtual table callbacks can only report `rusqlite::Error`; plain SQLite
    /// errors keep their code, everything else becomes a module error message.
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::Sqlite(source) => source,
            other => rusqlite::Error::ModuleError(other.to_string()),
        }
    }
}

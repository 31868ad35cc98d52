//! Error types for schema reflection

use crate::dialect::Dialect;
use thiserror::Error;

/// Result type alias for reflection operations
pub type ReflectResult<T> = Result<T, ReflectError>;

/// Error type for reflection operations
///
/// Every variant is fatal for a run: no partial schema is ever returned.
#[derive(Error, Debug)]
pub enum ReflectError {
    /// The connection URL names no supported database
    #[error("unsupported database URL scheme: {0}")]
    UnsupportedUrl(String),

    /// Could not open the connection
    #[error("failed to connect to {dialect} database: {source}")]
    Connection {
        dialect: Dialect,
        #[source]
        source: sqlx::Error,
    },

    /// A metadata query failed
    #[error("failed to reflect {what}: {source}")]
    Query {
        what: String,
        #[source]
        source: sqlx::Error,
    },
}

impl ReflectError {
    pub(crate) fn query(what: impl Into<String>) -> impl FnOnce(sqlx::Error) -> Self {
        let what = what.into();
        move |source| ReflectError::Query { what, source }
    }

    /// True when the database could not be reached at all
    pub fn is_connection_error(&self) -> bool {
        matches!(self, ReflectError::Connection { .. })
    }
}

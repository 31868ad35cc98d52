//! modelgen-reflect - Database schema reflection
//!
//! This crate connects to a live database, reads every table and its columns in one
//! pass, and hands the result to the SQLAlchemy emitter in `modelgen-core`:
//! - [`reflect_schema`] returns the [`DatabaseSchema`]
//! - [`emit_from_database`] reflects and generates in one call
//! - [`Dialect`] detects the backend from the connection URL
//!
//! One connection is opened per call and closed before returning, on success and on
//! failure. Any connection or query error fails the whole call.

mod dialect;
mod error;
mod mysql;
mod native_type;
mod postgres;
mod sqlite;

pub use dialect::Dialect;
pub use error::{ReflectError, ReflectResult};
pub use native_type::native_type_name;

use modelgen_core::{DatabaseSchema, GenerationReport, generate_models};

/// Reflect every table of the database at `connection_url`.
pub async fn reflect_schema(connection_url: &str) -> ReflectResult<DatabaseSchema> {
    let (dialect, url) = Dialect::from_url(connection_url)?;
    tracing::info!(%dialect, "reflecting database schema");

    let schema = match dialect {
        Dialect::Sqlite => sqlite::reflect(&url).await?,
        Dialect::Postgres => postgres::reflect(&url).await?,
        Dialect::MySql => mysql::reflect(&url).await?,
    };

    tracing::info!(tables = schema.len(), "schema reflected");
    Ok(schema)
}

/// Reflect the database and generate one SQLAlchemy model per selected table.
///
/// `table_filter` selects tables by exact name; `None` or an empty list selects all.
/// Requested tables that do not exist are logged and listed in
/// [`GenerationReport::skipped`].
pub async fn emit_from_database(
    connection_url: &str,
    table_filter: Option<&[String]>,
) -> ReflectResult<GenerationReport> {
    let schema = reflect_schema(connection_url).await?;
    Ok(generate_models(&schema, table_filter))
}

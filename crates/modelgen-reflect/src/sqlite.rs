//! SQLite reflection via `sqlite_master` and `pragma_table_info`.

use crate::dialect::Dialect;
use crate::error::{ReflectError, ReflectResult};
use crate::native_type::sqlite_type_name;
use modelgen_core::{ColumnDefault, ColumnSpec, DatabaseSchema, TableSchema};
use sqlx::{Connection, Row, SqliteConnection};

const TABLES_SQL: &str = "SELECT name FROM sqlite_master \
     WHERE type = 'table' AND name NOT LIKE 'sqlite~_%' ESCAPE '~' \
     ORDER BY name";

const COLUMNS_SQL: &str = "SELECT name, type AS declared_type, \"notnull\" AS not_null, \
     dflt_value, pk \
     FROM pragma_table_info(?1) ORDER BY cid";

/// Open a connection, reflect every table, close the connection.
pub(crate) async fn reflect(url: &str) -> ReflectResult<DatabaseSchema> {
    let mut conn = SqliteConnection::connect(url)
        .await
        .map_err(|source| ReflectError::Connection {
            dialect: Dialect::Sqlite,
            source,
        })?;

    let reflected = reflect_tables(&mut conn).await;

    if let Err(e) = conn.close().await {
        tracing::warn!("failed to close sqlite connection: {e}");
    }
    reflected
}

async fn reflect_tables(conn: &mut SqliteConnection) -> ReflectResult<DatabaseSchema> {
    let names: Vec<String> = sqlx::query_scalar(TABLES_SQL)
        .fetch_all(&mut *conn)
        .await
        .map_err(ReflectError::query("sqlite table list"))?;

    let mut tables = Vec::with_capacity(names.len());
    for name in names {
        let columns = reflect_columns(conn, &name).await?;
        tracing::debug!(table = %name, columns = columns.len(), "reflected table");
        tables.push(TableSchema::new(name, columns));
    }

    Ok(DatabaseSchema::new(tables))
}

async fn reflect_columns(conn: &mut SqliteConnection, table: &str) -> ReflectResult<Vec<ColumnSpec>> {
    let rows = sqlx::query(COLUMNS_SQL)
        .bind(table)
        .fetch_all(&mut *conn)
        .await
        .map_err(ReflectError::query(format!("columns of table '{table}'")))?;

    rows.iter()
        .map(|row| {
            let name: String = row.try_get("name")?;
            let declared_type: Option<String> = row.try_get("declared_type")?;
            let not_null: i64 = row.try_get("not_null")?;
            let default: Option<String> = row.try_get("dflt_value")?;
            let pk: i64 = row.try_get("pk")?;

            Ok(ColumnSpec {
                name,
                native_type_name: sqlite_type_name(declared_type.as_deref().unwrap_or_default()),
                is_primary_key: pk > 0,
                is_nullable: not_null == 0,
                default: default.as_deref().and_then(ColumnDefault::from_sql),
            })
        })
        .collect::<Result<Vec<_>, sqlx::Error>>()
        .map_err(ReflectError::query(format!("columns of table '{table}'")))
}

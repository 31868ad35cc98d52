//! PostgreSQL reflection via `information_schema`, limited to `current_schema()`.

use crate::dialect::Dialect;
use crate::error::{ReflectError, ReflectResult};
use crate::native_type::native_type_name;
use modelgen_core::{ColumnDefault, ColumnSpec, DatabaseSchema, TableSchema};
use sqlx::{Connection, PgConnection, Row};

// information_schema columns are domain types; cast so they decode as TEXT
const TABLES_SQL: &str = "SELECT table_name::text FROM information_schema.tables \
     WHERE table_schema = current_schema() AND table_type = 'BASE TABLE' \
     ORDER BY table_name";

const COLUMNS_SQL: &str = "SELECT column_name::text AS column_name, \
     data_type::text AS data_type, \
     is_nullable::text AS is_nullable, \
     column_default::text AS column_default \
     FROM information_schema.columns \
     WHERE table_schema = current_schema() AND table_name = $1 \
     ORDER BY ordinal_position";

const PRIMARY_KEY_SQL: &str = "SELECT kcu.column_name::text \
     FROM information_schema.table_constraints tc \
     JOIN information_schema.key_column_usage kcu \
       ON tc.constraint_name = kcu.constraint_name \
      AND tc.table_schema = kcu.table_schema \
      AND tc.table_name = kcu.table_name \
     WHERE tc.constraint_type = 'PRIMARY KEY' \
       AND tc.table_schema = current_schema() \
       AND tc.table_name = $1";

/// Open a connection, reflect every table, close the connection.
pub(crate) async fn reflect(url: &str) -> ReflectResult<DatabaseSchema> {
    let mut conn = PgConnection::connect(url)
        .await
        .map_err(|source| ReflectError::Connection {
            dialect: Dialect::Postgres,
            source,
        })?;

    let reflected = reflect_tables(&mut conn).await;

    if let Err(e) = conn.close().await {
        tracing::warn!("failed to close postgres connection: {e}");
    }
    reflected
}

async fn reflect_tables(conn: &mut PgConnection) -> ReflectResult<DatabaseSchema> {
    let names: Vec<String> = sqlx::query_scalar(TABLES_SQL)
        .fetch_all(&mut *conn)
        .await
        .map_err(ReflectError::query("postgres table list"))?;

    let mut tables = Vec::with_capacity(names.len());
    for name in names {
        let columns = reflect_columns(conn, &name).await?;
        tracing::debug!(table = %name, columns = columns.len(), "reflected table");
        tables.push(TableSchema::new(name, columns));
    }

    Ok(DatabaseSchema::new(tables))
}

async fn reflect_columns(conn: &mut PgConnection, table: &str) -> ReflectResult<Vec<ColumnSpec>> {
    let primary_keys: Vec<String> = sqlx::query_scalar(PRIMARY_KEY_SQL)
        .bind(table)
        .fetch_all(&mut *conn)
        .await
        .map_err(ReflectError::query(format!("primary key of table '{table}'")))?;

    let rows = sqlx::query(COLUMNS_SQL)
        .bind(table)
        .fetch_all(&mut *conn)
        .await
        .map_err(ReflectError::query(format!("columns of table '{table}'")))?;

    rows.iter()
        .map(|row| {
            let name: String = row.try_get("column_name")?;
            let data_type: String = row.try_get("data_type")?;
            let is_nullable: String = row.try_get("is_nullable")?;
            let default: Option<String> = row.try_get("column_default")?;

            Ok(ColumnSpec {
                is_primary_key: primary_keys.contains(&name),
                native_type_name: native_type_name(&data_type),
                is_nullable: is_nullable.eq_ignore_ascii_case("YES"),
                default: default.as_deref().and_then(ColumnDefault::from_sql),
                name,
            })
        })
        .collect::<Result<Vec<_>, sqlx::Error>>()
        .map_err(ReflectError::query(format!("columns of table '{table}'")))
}

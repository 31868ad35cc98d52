//! MySQL / MariaDB reflection via `information_schema`, limited to `DATABASE()`.

use crate::dialect::Dialect;
use crate::error::{ReflectError, ReflectResult};
use crate::native_type::native_type_name;
use modelgen_core::{ColumnDefault, ColumnSpec, DatabaseSchema, TableSchema};
use sqlx::{Connection, MySqlConnection, Row};

// MySQL 8 reports information_schema text as binary; CAST keeps it decodable as String
const TABLES_SQL: &str = "SELECT CAST(TABLE_NAME AS CHAR) FROM information_schema.TABLES \
     WHERE TABLE_SCHEMA = DATABASE() AND TABLE_TYPE = 'BASE TABLE' \
     ORDER BY TABLE_NAME";

const COLUMNS_SQL: &str = "SELECT CAST(COLUMN_NAME AS CHAR) AS column_name, \
     CAST(DATA_TYPE AS CHAR) AS data_type, \
     CAST(IS_NULLABLE AS CHAR) AS is_nullable, \
     CAST(COLUMN_DEFAULT AS CHAR) AS column_default, \
     CAST(COLUMN_KEY AS CHAR) AS column_key, \
     CAST(EXTRA AS CHAR) AS extra \
     FROM information_schema.COLUMNS \
     WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ? \
     ORDER BY ORDINAL_POSITION";

/// Open a connection, reflect every table, close the connection.
pub(crate) async fn reflect(url: &str) -> ReflectResult<DatabaseSchema> {
    let mut conn = MySqlConnection::connect(url)
        .await
        .map_err(|source| ReflectError::Connection {
            dialect: Dialect::MySql,
            source,
        })?;

    let reflected = reflect_tables(&mut conn).await;

    if let Err(e) = conn.close().await {
        tracing::warn!("failed to close mysql connection: {e}");
    }
    reflected
}

async fn reflect_tables(conn: &mut MySqlConnection) -> ReflectResult<DatabaseSchema> {
    let names: Vec<String> = sqlx::query_scalar(TABLES_SQL)
        .fetch_all(&mut *conn)
        .await
        .map_err(ReflectError::query("mysql table list"))?;

    let mut tables = Vec::with_capacity(names.len());
    for name in names {
        let columns = reflect_columns(conn, &name).await?;
        tracing::debug!(table = %name, columns = columns.len(), "reflected table");
        tables.push(TableSchema::new(name, columns));
    }

    Ok(DatabaseSchema::new(tables))
}

async fn reflect_columns(conn: &mut MySqlConnection, table: &str) -> ReflectResult<Vec<ColumnSpec>> {
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
            let column_key: String = row.try_get("column_key")?;
            let extra: String = row.try_get("extra")?;

            Ok(ColumnSpec {
                name,
                native_type_name: native_type_name(&data_type),
                is_primary_key: column_key == "PRI",
                is_nullable: is_nullable.eq_ignore_ascii_case("YES"),
                default: default.as_deref().and_then(|raw| mysql_default(raw, &extra)),
            })
        })
        .collect::<Result<Vec<_>, sqlx::Error>>()
        .map_err(ReflectError::query(format!("columns of table '{table}'")))
}

/// Interpret a `COLUMN_DEFAULT` value.
///
/// MySQL 8 reports literals unquoted and marks expressions with `DEFAULT_GENERATED`
/// in `EXTRA`. MariaDB quotes string literals, reports expressions as written and
/// uses the text `NULL` for "no default".
pub(crate) fn mysql_default(raw: &str, extra: &str) -> Option<ColumnDefault> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("null") {
        return None;
    }
    if trimmed.starts_with('\'') {
        return ColumnDefault::from_sql(trimmed);
    }

    let is_expression = extra.to_ascii_uppercase().contains("DEFAULT_GENERATED")
        || trimmed.ends_with(')')
        || trimmed.to_ascii_uppercase().starts_with("CURRENT_TIMESTAMP");
    Some(ColumnDefault::from_unquoted(raw, is_expression))
}

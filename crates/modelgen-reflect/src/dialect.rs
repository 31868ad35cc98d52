//! Database dialect detection from connection URLs.
//!
//! | URL prefix | Dialect |
//! |------------|---------|
//! | `sqlite:` | [`Dialect::Sqlite`] |
//! | `postgres:`, `postgresql:` | [`Dialect::Postgres`] |
//! | `mysql:`, `mariadb:` | [`Dialect::MySql`] |
//!
//! SQLAlchemy-style URLs carrying a driver (`mysql+pymysql://...`) are accepted; the
//! `+driver` part is dropped before the URL is handed to sqlx.

use crate::error::{ReflectError, ReflectResult};

/// Supported database backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Sqlite,
    Postgres,
    MySql,
}

impl Dialect {
    /// Detect the dialect and return the URL sqlx should connect with.
    pub fn from_url(url: &str) -> ReflectResult<(Self, String)> {
        let url = url.trim();
        let (scheme, rest) = url
            .split_once(':')
            .ok_or_else(|| ReflectError::UnsupportedUrl(url.to_string()))?;

        let base = scheme
            .split_once('+')
            .map_or(scheme, |(base, _driver)| base)
            .to_ascii_lowercase();

        let dialect = match base.as_str() {
            "sqlite" => Dialect::Sqlite,
            "postgres" | "postgresql" => Dialect::Postgres,
            "mysql" | "mariadb" => Dialect::MySql,
            _ => return Err(ReflectError::UnsupportedUrl(scheme.to_string())),
        };

        Ok((dialect, format!("{}:{rest}", dialect.sqlx_scheme(&base))))
    }

    /// Scheme sqlx expects; `mariadb` is served by the MySQL driver.
    fn sqlx_scheme(self, base: &str) -> &str {
        match self {
            Dialect::MySql => "mysql",
            _ => base,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Sqlite => write!(f, "sqlite"),
            Dialect::Postgres => write!(f, "postgres"),
            Dialect::MySql => write!(f, "mysql"),
        }
    }
}

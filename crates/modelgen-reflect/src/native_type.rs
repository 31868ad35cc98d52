//! Normalisation of reported column types into native type names.
//!
//! Databases describe types differently: SQLite keeps the declared text
//! (`VARCHAR(255)`), PostgreSQL reports SQL-standard names (`character varying`),
//! MySQL reports short names (`int`). This reduces all of them to one unqualified,
//! upper-case name such as `VARCHAR` or `INTEGER` for the type map.

/// Name used for columns declared without a type (SQLite allows this).
pub const UNTYPED: &str = "NULLTYPE";

const ALIASES: &[(&str, &str)] = &[
    ("INT", "INTEGER"),
    ("INT4", "INTEGER"),
    ("INT2", "SMALLINT"),
    ("INT8", "BIGINT"),
    ("BOOL", "BOOLEAN"),
    ("CHARACTER VARYING", "VARCHAR"),
    ("CHARACTER", "CHAR"),
    ("TIMESTAMP WITHOUT TIME ZONE", "TIMESTAMP"),
    ("TIMESTAMP WITH TIME ZONE", "TIMESTAMP"),
    ("TIME WITHOUT TIME ZONE", "TIME"),
    ("TIME WITH TIME ZONE", "TIME"),
];

/// Reduce a reported type to its native type name.
///
/// Drops any length/precision arguments, upper-cases, collapses whitespace and applies
/// the alias table. Remaining multi-word names are joined with `_`
/// (`double precision` -> `DOUBLE_PRECISION`).
pub fn native_type_name(reported: &str) -> String {
    let base = reported.split('(').next().unwrap_or_default();
    let words: Vec<String> = base.split_whitespace().map(str::to_uppercase).collect();
    if words.is_empty() {
        return UNTYPED.to_string();
    }

    let joined = words.join(" ");
    match ALIASES.iter().find(|(alias, _)| *alias == joined) {
        Some((_, canonical)) => (*canonical).to_string(),
        None => words.join("_"),
    }
}

/// Declared type names SQLite reflection recognises as-is, with their canonical name.
const SQLITE_TYPE_NAMES: &[(&str, &str)] = &[
    ("BIGINT", "BIGINT"),
    ("BLOB", "BLOB"),
    ("BOOL", "BOOLEAN"),
    ("BOOLEAN", "BOOLEAN"),
    ("CHAR", "CHAR"),
    ("DATE", "DATE"),
    ("DATE_CHAR", "DATE"),
    ("DATETIME", "DATETIME"),
    ("DATETIME_CHAR", "DATETIME"),
    ("DOUBLE", "DOUBLE"),
    ("DECIMAL", "DECIMAL"),
    ("FLOAT", "FLOAT"),
    ("INT", "INTEGER"),
    ("INTEGER", "INTEGER"),
    ("JSON", "JSON"),
    ("NUMERIC", "NUMERIC"),
    ("REAL", "REAL"),
    ("SMALLINT", "SMALLINT"),
    ("TEXT", "TEXT"),
    ("TIME", "TIME"),
    ("TIME_CHAR", "TIME"),
    ("TIMESTAMP", "TIMESTAMP"),
    ("VARCHAR", "VARCHAR"),
    ("NVARCHAR", "NVARCHAR"),
    ("NCHAR", "NCHAR"),
];

/// Resolve a SQLite declared type to its native type name.
///
/// SQLite accepts any text as a column type. Recognised names map directly; the
/// rest resolve by SQLite's type affinity rules, checked in this order:
///
/// | Declared type contains | Native name |
/// |------------------------|-------------|
/// | `INT`                  | `INTEGER`   |
/// | `CHAR`, `CLOB`, `TEXT` | `TEXT`      |
/// | `BLOB`, or no type     | `NULLTYPE`  |
/// | `REAL`, `FLOA`, `DOUB` | `REAL`      |
/// | anything else          | `NUMERIC`   |
pub fn sqlite_type_name(declared: &str) -> String {
    let base = declared.split('(').next().unwrap_or_default();
    let name = base
        .split_whitespace()
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join(" ");

    if let Some((_, canonical)) = SQLITE_TYPE_NAMES.iter().find(|(known, _)| *known == name) {
        return (*canonical).to_string();
    }

    let contains_any = |needles: &[&str]| needles.iter().any(|n| name.contains(n));
    let affinity = if contains_any(&["INT"]) {
        "INTEGER"
    } else if contains_any(&["CHAR", "CLOB", "TEXT"]) {
        "TEXT"
    } else if name.is_empty() || contains_any(&["BLOB"]) {
        UNTYPED
    } else if contains_any(&["REAL", "FLOA", "DOUB"]) {
        "REAL"
    } else {
        "NUMERIC"
    };
    affinity.to_string()
}

//! Native column type to SQLAlchemy type mapping.
//!
//! The table is finite and explicit. Lookup upper-cases the native name first, and
//! every name not listed resolves to [`DEFAULT_SQLALCHEMY_TYPE`], so lookup never fails.
//!
//! | Native type | SQLAlchemy |
//! |-------------|------------|
//! | `INTEGER`, `SMALLINT`, `BIGINT` | `Integer` |
//! | `VARCHAR`, `CHAR` | `String` |
//! | `TEXT` | `Text` |
//! | `DATETIME` | `DateTime` |
//! | `DATE` | `Date` |
//! | `BOOLEAN` | `Boolean` |
//! | `FLOAT`, `NUMERIC`, `DECIMAL` | `Float` |
//! | anything else | `String` |

/// Type used for every native type the table does not list.
pub const DEFAULT_SQLALCHEMY_TYPE: &str = "String";

/// Type mapping from native column type to SQLAlchemy
pub struct TypeMapping {
    pub native_type: &'static str,
    pub sqlalchemy_type: &'static str,
}

pub const TYPE_MAPPINGS: &[TypeMapping] = &[
    TypeMapping {
        native_type: "INTEGER",
        sqlalchemy_type: "Integer",
    },
    TypeMapping {
        native_type: "SMALLINT",
        sqlalchemy_type: "Integer",
    },
    TypeMapping {
        native_type: "BIGINT",
        sqlalchemy_type: "Integer",
    },
    TypeMapping {
        native_type: "VARCHAR",
        sqlalchemy_type: "String",
    },
    TypeMapping {
        native_type: "CHAR",
        sqlalchemy_type: "String",
    },
    TypeMapping {
        native_type: "TEXT",
        sqlalchemy_type: "Text",
    },
    TypeMapping {
        native_type: "DATETIME",
        sqlalchemy_type: "DateTime",
    },
    TypeMapping {
        native_type: "DATE",
        sqlalchemy_type: "Date",
    },
    TypeMapping {
        native_type: "BOOLEAN",
        sqlalchemy_type: "Boolean",
    },
    TypeMapping {
        native_type: "FLOAT",
        sqlalchemy_type: "Float",
    },
    TypeMapping {
        native_type: "NUMERIC",
        sqlalchemy_type: "Float",
    },
    TypeMapping {
        native_type: "DECIMAL",
        sqlalchemy_type: "Float",
    },
];

/// Map a native type name to its SQLAlchemy type, case-insensitively.
pub fn sqlalchemy_type(native_type_name: &str) -> &'static str {
    let upper = native_type_name.to_uppercase();
    TYPE_MAPPINGS
        .iter()
        .find(|m| m.native_type == upper)
        .map(|m| m.sqlalchemy_type)
        .unwrap_or(DEFAULT_SQLALCHEMY_TYPE)
}

//! modelgen-core - Model IR, type mapping and Python source emitters
//!
//! This crate provides the pure half of modelgen:
//! - [`pydantic`] emits a pydantic `BaseModel` from a [`FieldList`]
//! - [`sqlalchemy`] emits SQLAlchemy declarative models from a [`DatabaseSchema`]
//! - [`type_map`] maps native column type names to SQLAlchemy types
//! - [`LogLevel`] for the CLI's logging setup
//!
//! Nothing here touches a database or the filesystem.

pub mod default;
pub mod ir;
pub mod naming;
pub mod pydantic;
pub mod sqlalchemy;
pub mod type_map;

pub use default::{ColumnDefault, PyLiteral};
pub use ir::{ColumnSpec, DatabaseSchema, FieldList, FieldSpec, GeneratedModel, TableSchema};
pub use pydantic::{FieldLineError, emit, parse_field_line};
pub use sqlalchemy::{GenerationReport, generate_models, render_module};

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Error returned when a log level name is not recognised
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log level: {0} (expected trace, debug, info, warn, error or off)")]
pub struct ParseLogLevelError(pub String);

impl std::str::FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" | "none" => Ok(LogLevel::Off),
            _ => Err(ParseLogLevelError(s.to_string())),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ColumnDefault, ColumnSpec, DatabaseSchema, FieldList, FieldSpec, GeneratedModel,
        LogLevel, PyLiteral, TableSchema,
    };
}

#[cfg(test)]
mod lib_tests;

//! Intermediate representation shared by both generators.
//!
//! # Structure
//!
//! - [`FieldSpec`] / [`FieldList`]: user-supplied `name: type` pairs for the pydantic emitter
//! - [`ColumnSpec`] / [`TableSchema`] / [`DatabaseSchema`]: reflected tables for the
//!   SQLAlchemy emitter
//! - [`GeneratedModel`]: one rendered class, kept per table for testability
//!
//! Every collection here preserves insertion order; generated attribute order always
//! matches input order.

use crate::default::ColumnDefault;

/// A single `name: type` pair.
///
/// `declared_type` is never checked against real Python types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub declared_type: String,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }
}

/// Ordered field mapping.
///
/// Behaves like an insertion-ordered map: inserting a name that is already present
/// replaces its type but keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldList {
    fields: Vec<FieldSpec>,
}

impl FieldList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, name: impl Into<String>, declared_type: impl Into<String>) {
        let spec = FieldSpec::new(name, declared_type);
        match self.fields.iter_mut().find(|f| f.name == spec.name) {
            Some(existing) => existing.declared_type = spec.declared_type,
            None => self.fields.push(spec),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.declared_type.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }
}

impl<N, T> FromIterator<(N, T)> for FieldList
where
    N: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut list = Self::new();
        for (name, ty) in iter {
            list.insert(name, ty);
        }
        list
    }
}

impl FromIterator<FieldSpec> for FieldList {
    fn from_iter<I: IntoIterator<Item = FieldSpec>>(iter: I) -> Self {
        iter.into_iter()
            .map(|f| (f.name, f.declared_type))
            .collect()
    }
}

/// A reflected column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    /// Column name as reported by the database.
    pub name: String,

    /// Unqualified type name, e.g. `INTEGER` or `VARCHAR` (no length or precision).
    pub native_type_name: String,

    pub is_primary_key: bool,

    pub is_nullable: bool,

    /// Declared default, if any.
    pub default: Option<ColumnDefault>,
}

impl ColumnSpec {
    /// A nullable, non-key column without a default.
    pub fn new(name: impl Into<String>, native_type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            native_type_name: native_type_name.into(),
            is_primary_key: false,
            is_nullable: true,
            default: None,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.is_nullable = false;
        self
    }

    pub fn with_default(mut self, default: ColumnDefault) -> Self {
        self.default = Some(default);
        self
    }
}

/// A reflected table and its columns in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    pub table_name: String,
    pub columns: Vec<ColumnSpec>,
}

impl TableSchema {
    pub fn new(table_name: impl Into<String>, columns: Vec<ColumnSpec>) -> Self {
        Self {
            table_name: table_name.into(),
            columns,
        }
    }
}

/// Every table found in one reflection pass, in reflection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseSchema {
    tables: Vec<TableSchema>,
}

impl DatabaseSchema {
    pub fn new(tables: Vec<TableSchema>) -> Self {
        Self { tables }
    }

    /// Look up a table by exact name.
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|t| t.table_name == name)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.table_name.as_str())
    }

    pub fn tables(&self) -> &[TableSchema] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// One generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModel {
    /// Source table (or the class name itself for pydantic models).
    pub table_name: String,

    pub class_name: String,

    /// Attribute declaration lines, indented, without trailing newlines.
    pub attributes: Vec<String>,

    /// The full class block as it appears in the output module.
    pub code: String,
}

#[cfg(test)]
#[path = "ir/ir_tests.rs"]
mod ir_tests;

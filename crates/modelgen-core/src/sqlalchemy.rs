//! SQLAlchemy declarative model generation from a reflected schema.
//!
//! Each table becomes one class block:
//!
//! ```text
//! class Customers(Base):
//!     __tablename__ = 'customers'
//!
//!     id = Column(Integer, primary_key=True, nullable=False)
//!     email = Column(String, nullable=False)
//! ```
//!
//! Column modifiers always appear in the order `primary_key`, `nullable`, `default`.
//! Only literal defaults are written; expression defaults are left out.

use crate::ir::{ColumnSpec, DatabaseSchema, GeneratedModel, TableSchema};
use crate::naming::class_name_for_table;
use crate::pydantic::INDENT;
use crate::type_map::sqlalchemy_type;

/// Imports and `Base` declaration written before the first class.
pub const MODULE_HEADER: &str = "\
from sqlalchemy import Column, Integer, String, Float, Boolean, Date, DateTime, Text, ForeignKey
from sqlalchemy.ext.declarative import declarative_base

Base = declarative_base()

";

/// Result of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Generated classes in processing order.
    pub models: Vec<GeneratedModel>,

    /// Requested tables that were not in the schema.
    pub skipped: Vec<String>,
}

impl GenerationReport {
    /// The whole output module.
    pub fn render(&self) -> String {
        render_module(&self.models)
    }
}

/// Generate one model per selected table.
///
/// With no filter (or an empty one) every reflected table is generated in reflection
/// order. Otherwise exactly the requested names are used, in the caller's order;
/// names missing from the schema are logged and skipped.
pub fn generate_models(schema: &DatabaseSchema, table_filter: Option<&[String]>) -> GenerationReport {
    let selected: Vec<&str> = match table_filter {
        Some(names) if !names.is_empty() => names.iter().map(String::as_str).collect(),
        _ => schema.table_names().collect(),
    };

    let mut report = GenerationReport::default();
    for name in selected {
        match schema.table(name) {
            Some(table) => report.models.push(render_model(table)),
            None => {
                tracing::warn!("Table '{name}' not found, skipping");
                report.skipped.push(name.to_string());
            }
        }
    }

    tracing::info!(
        generated = report.models.len(),
        skipped = report.skipped.len(),
        "model generation finished"
    );
    report
}

/// Render the class block for one table.
pub fn render_model(table: &TableSchema) -> GeneratedModel {
    let class_name = class_name_for_table(&table.table_name);
    let attributes: Vec<String> = table.columns.iter().map(column_declaration).collect();

    let mut code = String::new();
    code.push_str(&format!("class {class_name}(Base):\n"));
    code.push_str(&format!(
        "{INDENT}__tablename__ = '{}'\n\n",
        table.table_name
    ));
    for attribute in &attributes {
        code.push_str(attribute);
        code.push('\n');
    }
    code.push_str("\n\n");

    GeneratedModel {
        table_name: table.table_name.clone(),
        class_name,
        attributes,
        code,
    }
}

/// Build the `name = Column(...)` line for a column.
pub fn column_declaration(column: &ColumnSpec) -> String {
    let mut args = vec![sqlalchemy_type(&column.native_type_name).to_string()];

    if column.is_primary_key {
        args.push("primary_key=True".to_string());
    }
    if !column.is_nullable {
        args.push("nullable=False".to_string());
    }
    if let Some(literal) = column.default.as_ref().and_then(|d| d.literal()) {
        args.push(format!("default={}", literal.to_python()));
    }

    format!("{INDENT}{} = Column({})", column.name, args.join(", "))
}

/// Join the header and every class block into the output module.
pub fn render_module(models: &[GeneratedModel]) -> String {
    let mut out = String::from(MODULE_HEADER);
    for model in models {
        out.push_str(&model.code);
    }
    out
}

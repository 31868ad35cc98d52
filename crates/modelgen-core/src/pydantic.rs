//! Pydantic model generation from a field list.
//!
//! ```text
//! from pydantic import BaseModel
//!
//! class Customer(BaseModel):
//!     name: str
//!     age: int
//! ```
//!
//! Names and types are written verbatim. The emitter does not check that the class
//! name or any field is a valid Python identifier or type.

use crate::ir::{FieldList, FieldSpec};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Indentation of every class body line.
pub const INDENT: &str = "    ";

/// Word that ends interactive field entry (case-insensitive).
pub const DONE_KEYWORD: &str = "done";

/// Notice printed for a field line without a `:`.
pub const INVALID_FIELD_NOTICE: &str = "Invalid format. Use name:type (e.g., email:str)";

/// Error for a field line that is not `name:type`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldLineError {
    #[error("missing ':' separator in {0:?}")]
    MissingSeparator(String),
}

/// Generate a pydantic `BaseModel` class definition.
///
/// An empty field list produces a `pass` body so the class stays valid Python.
/// The result has no trailing newline.
pub fn emit(class_name: &str, fields: &FieldList) -> String {
    let mut lines = vec![
        "from pydantic import BaseModel".to_string(),
        String::new(),
        format!("class {class_name}(BaseModel):"),
    ];

    if fields.is_empty() {
        lines.push(format!("{INDENT}pass"));
    } else {
        lines.extend(
            fields
                .iter()
                .map(|f| format!("{INDENT}{}: {}", f.name, f.declared_type)),
        );
    }

    lines.join("\n")
}

/// Parse `name:type`, splitting on the first `:` and trimming both halves.
pub fn parse_field_line(line: &str) -> Result<FieldSpec, FieldLineError> {
    let (name, ty) = line
        .split_once(':')
        .ok_or_else(|| FieldLineError::MissingSeparator(line.to_string()))?;
    Ok(FieldSpec::new(name.trim(), ty.trim()))
}

/// Ask for the class name.
///
/// Returns the trimmed line, or `None` at end of input.
pub fn prompt_class_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    write!(output, "Enter class name: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Read `name:type` lines until `done` or end of input.
///
/// Malformed lines print [`INVALID_FIELD_NOTICE`] and are dropped; entry continues.
pub fn prompt_fields<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<FieldList> {
    writeln!(
        output,
        "Enter fields in format name:type (e.g., name:str, age:int). Type '{DONE_KEYWORD}' to finish."
    )?;

    let mut fields = FieldList::new();
    loop {
        write!(output, "Field: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("end of input before '{DONE_KEYWORD}', keeping {} field(s)", fields.len());
            break;
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case(DONE_KEYWORD) {
            break;
        }

        match parse_field_line(line) {
            Ok(spec) => fields.insert(spec.name, spec.declared_type),
            Err(e) => {
                tracing::debug!("discarding field line: {e}");
                writeln!(output, "{INVALID_FIELD_NOTICE}")?;
            }
        }
    }

    Ok(fields)
}

#[cfg(test)]
#[path = "pydantic/pydantic_tests.rs"]
mod pydantic_tests;

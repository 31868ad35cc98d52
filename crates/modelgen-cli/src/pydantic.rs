//! Pydantic command implementation

use anyhow::{Context, Result};
use modelgen_core::naming::module_file_name;
use modelgen_core::pydantic::{prompt_class_name, prompt_fields};
use modelgen_core::{FieldList, FieldSpec, emit};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Run the pydantic command against the terminal
pub fn run(class_name: Option<String>, fields: Vec<FieldSpec>, output_dir: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    run_with(&mut input, &mut output, class_name, fields, output_dir)?;
    Ok(())
}

/// Prompt for whatever was not given on the command line, print the model and save it
///
/// Returns the path of the written file.
pub fn run_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    class_name: Option<String>,
    fields: Vec<FieldSpec>,
    output_dir: &Path,
) -> Result<PathBuf> {
    let class_name = match class_name {
        Some(name) => name,
        None => prompt_class_name(input, output)?.context("No class name given")?,
    };
    if class_name.is_empty() {
        anyhow::bail!("Class name cannot be empty");
    }

    let fields: FieldList = if fields.is_empty() {
        prompt_fields(input, output)?
    } else {
        fields.into_iter().collect()
    };
    tracing::debug!(class = %class_name, fields = fields.len(), "generating pydantic model");

    let code = emit(&class_name, &fields);
    writeln!(output, "\n✓ Generated Pydantic model:\n")?;
    writeln!(output, "{code}")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {output_dir:?}"))?;
    let path = output_dir.join(module_file_name(&class_name));
    fs::write(&path, &code).with_context(|| format!("Failed to write {path:?}"))?;

    writeln!(output, "\n✓ Saved to {}", path.display())?;
    Ok(path)
}

//! Reflect command implementation

use crate::config::ReflectConfig;
use anyhow::{Context, Result};
use modelgen_core::GenerationReport;
use std::fs;
use std::path::Path;

/// Run the reflect command
pub fn run(config: &ReflectConfig) -> Result<()> {
    let report = generate(config)?;

    write_module(&config.output_file, &report.render())?;

    println!(
        "✓ {} model(s) generated and saved in {}",
        report.models.len(),
        config.output_file.display()
    );
    if !report.skipped.is_empty() {
        println!("  Skipped (not found): {}", report.skipped.join(", "));
    }

    Ok(())
}

/// Reflect the configured database on a single-threaded runtime
pub fn generate(config: &ReflectConfig) -> Result<GenerationReport> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime
        .block_on(modelgen_reflect::emit_from_database(
            &config.db_url,
            config.table_filter(),
        ))
        .context("Failed to generate models from database")
}

/// Write the module, creating parent directories first
pub fn write_module(path: &Path, code: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {parent:?}"))?;
    }

    fs::write(path, code).with_context(|| format!("Failed to write {path:?}"))?;
    tracing::info!(path = %path.display(), bytes = code.len(), "wrote models");
    Ok(())
}

// src/core/export.rs

use std::path::{Path, PathBuf};

use chrono::Utc;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use crate::core::models::SecurityReport;

/// Writes the report as pretty JSON into `directory` and returns the file path.
/// The directory is created when missing.
pub fn export_report(report: &SecurityReport, directory: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(directory)
        .wrap_err_with(|| format!("Could not create {}", directory.display()))?;

    let file_name = format!("security-report-{}.json", Utc::now().format("%Y%m%dT%H%M%S%3fZ"));
    let path = directory.join(file_name);
    let json = serde_json::to_string_pretty(report).wrap_err("Could not serialize the report")?;
    std::fs::write(&path, json).wrap_err_with(|| format!("Could not write {}", path.display()))?;

    info!(path = %path.display(), "Security report exported.");
    Ok(path)
}

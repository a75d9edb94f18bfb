//! Report persistence: dated file name, pretty JSON, one-shot write.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::core::errors::{Result, RockrError};
use crate::report::builder::Report;

/// File name for a report generated on `date`: `<prefix>-<YYYY-MM-DD>.json`.
#[must_use]
pub fn report_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}-{}.json", date.format("%Y-%m-%d"))
}

/// Serialize `report` as 2-space-indented JSON and write it under `dir`.
///
/// The output directory is created if absent. Serialization happens before
/// any filesystem mutation, so a failure there leaves no artifact behind.
/// Returns the path written.
pub fn write_report(report: &Report, dir: &Path, prefix: &str, date: NaiveDate) -> Result<PathBuf> {
    let body = serde_json::to_string_pretty(report)?;

    fs::create_dir_all(dir).map_err(|source| RockrError::io(dir, source))?;
    let path = dir.join(report_file_name(prefix, date));
    fs::write(&path, body).map_err(|source| RockrError::io(&path, source))?;
    Ok(path)
}

//! Export file boundary
//!
//! Turns an encoded report into a dated file the way the dashboard
//! offers downloads: `sentiment-analysis-<YYYY-MM-DD>.<ext>`.

use crate::{to_csv, to_json};
use chrono::{NaiveDate, Utc};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use vibescope_core::{AnalysisResult, Error, Result};

/// Supported export encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }

    /// Encode results in this format
    pub fn encode(&self, results: &[AnalysisResult]) -> Result<String> {
        match self {
            Self::Csv => to_csv(results),
            Self::Json => to_json(results),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(Error::validation(format!("unknown export format: {other}"))),
        }
    }
}

/// Download filename for a report encoded on the given date
pub fn export_filename(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "sentiment-analysis-{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Encode results and write them to a dated file under `dir`.
///
/// Returns the path of the written file.
pub fn write_export(
    dir: impl AsRef<Path>,
    format: ExportFormat,
    results: &[AnalysisResult],
) -> Result<PathBuf> {
    let content = format.encode(results)?;
    let path = dir
        .as_ref()
        .join(export_filename(format, Utc::now().date_naive()));

    std::fs::write(&path, content)?;
    tracing::info!(path = %path.display(), count = results.len(), "wrote export");

    Ok(path)
}

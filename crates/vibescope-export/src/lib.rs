//! Vibescope Export
//!
//! Pure encoders turning a set of [`AnalysisResult`]s into CSV or
//! JSON report text, plus the dated-filename boundary for offering
//! them as downloads.
//!
//! [`AnalysisResult`]: vibescope_core::AnalysisResult

pub mod csv;
pub mod download;
pub mod json;

pub use csv::to_csv;
pub use download::{export_filename, write_export, ExportFormat};
pub use json::{to_json, to_json_at, ExportDocument, ExportRecord};

/// Render a score in [0, 1] as a percentage with exactly two
/// decimals, e.g. `0.8732` → `"87.32%"`.
pub fn format_percentage(score: f32) -> String {
    format!("{:.2}%", score * 100.0)
}

//! JSON export encoding

use crate::format_percentage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vibescope_core::{AnalysisResult, Error, Result};

/// The exported report document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// When the report was encoded
    pub exported_at: DateTime<Utc>,

    /// Number of results in the report
    pub total_analyzed: usize,

    pub results: Vec<ExportRecord>,
}

/// One result as it appears in the JSON report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub text: String,
    pub sentiment: String,

    /// Raw confidence score, carried without precision loss
    pub confidence_score: f32,

    /// Two-decimal percentage rendering of the score
    pub percentage: String,
}

/// Encode results as a pretty-printed JSON report stamped with the
/// current time.
pub fn to_json(results: &[AnalysisResult]) -> Result<String> {
    to_json_at(results, Utc::now())
}

/// Encode results with an injected timestamp.
///
/// The timestamp is the only non-deterministic field of the report;
/// tests freeze it here.
pub fn to_json_at(results: &[AnalysisResult], exported_at: DateTime<Utc>) -> Result<String> {
    if results.is_empty() {
        return Err(Error::validation("no results to export"));
    }

    let document = ExportDocument {
        exported_at,
        total_analyzed: results.len(),
        results: results
            .iter()
            .map(|result| ExportRecord {
                text: result.text.clone(),
                sentiment: result.label.clone(),
                confidence_score: result.score,
                percentage: format_percentage(result.score),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&document)?)
}

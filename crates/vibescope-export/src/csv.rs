//! CSV export encoding
//!
//! One header row, one row per result. The text field is
//! double-quoted with embedded quotes doubled (standard CSV quoting);
//! the label stays bare and the score renders as a two-decimal
//! percentage.

use crate::format_percentage;
use vibescope_core::{AnalysisResult, Error, Result};

const HEADER: &str = "Text,Sentiment,Confidence Score";

/// Encode results as CSV text.
///
/// Empty input is a validation error: there is nothing to export.
pub fn to_csv(results: &[AnalysisResult]) -> Result<String> {
    if results.is_empty() {
        return Err(Error::validation("no results to export"));
    }

    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(HEADER.to_string());

    for result in results {
        lines.push(format!(
            "\"{}\",{},{}",
            result.text.replace('"', "\"\""),
            result.label,
            format_percentage(result.score),
        ));
    }

    Ok(lines.join("\n"))
}

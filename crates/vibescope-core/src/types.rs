//! Core types for Vibescope

use serde::{Deserialize, Serialize};

/// One classified text item, the canonical record consumed by every
/// view and exporter.
///
/// `sentiment` and `label` both carry the classifier's raw label; no
/// casing or vocabulary normalization happens here. Consumers that
/// need a coarse bucket use [`Sentiment::from_label`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Original input text, unmodified
    pub text: String,

    /// Classifier's raw label
    pub sentiment: String,

    /// Confidence score in [0.0, 1.0]
    pub score: f32,

    /// Display label (equal to `sentiment`)
    pub label: String,
}

impl AnalysisResult {
    /// Shape a raw classification into the canonical record.
    pub fn shape(text: impl Into<String>, label: impl Into<String>, score: f32) -> Self {
        let label = label.into();
        Self {
            text: text.into(),
            sentiment: label.clone(),
            score,
            label,
        }
    }

    /// Coarse sentiment bucket for this result
    pub fn bucket(&self) -> Sentiment {
        Sentiment::from_label(&self.label)
    }
}

/// Coarse sentiment bucket derived from a classifier label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Bucket a raw label by case-insensitive substring match.
    ///
    /// Any label containing neither "positive" nor "negative" is
    /// treated as neutral.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.to_lowercase();
        if normalized.contains("positive") {
            Self::Positive
        } else if normalized.contains("negative") {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

}

impl std::str::FromStr for Sentiment {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            other => Err(crate::Error::validation(format!(
                "unknown sentiment bucket: {other}"
            ))),
        }
    }
}

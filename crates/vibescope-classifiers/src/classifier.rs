//! Classifier trait and common types

use async_trait::async_trait;
use vibescope_core::Result;

/// Trait for sentiment classifiers.
///
/// Implementations wrap whatever actually scores the text (a lexicon,
/// a local model, a remote service); callers only ever see the top
/// label/score pair of a possibly multi-label response.
#[async_trait]
pub trait Classifier: Send + Sync + std::fmt::Debug {
    /// Classify the given text
    async fn classify(&self, text: &str) -> Result<Classification>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Result of one classification call
#[derive(Debug, Clone)]
pub struct Classification {
    /// Top classification label
    pub label: String,

    /// Confidence score (0.0-1.0)
    pub score: f32,

    /// Full label distribution, when the backend produces one
    pub all_scores: Option<Vec<(String, f32)>>,
}

impl Classification {
    /// Create a new classification result
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
            all_scores: None,
        }
    }

    /// Attach the full label distribution
    pub fn with_scores(mut self, all_scores: Vec<(String, f32)>) -> Self {
        self.all_scores = Some(all_scores);
        self
    }
}

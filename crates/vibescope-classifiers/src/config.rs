//! Configuration for classifier construction

use serde::{Deserialize, Serialize};
use std::path::Path;
use vibescope_core::{Error, Result};

/// Configuration for the classifier backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Classifier name used in logs and metadata
    #[serde(default = "default_name")]
    pub name: String,

    /// Word lists for the lexicon classifier
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            lexicon: LexiconConfig::default(),
        }
    }
}

/// Word lists for the lexicon sentiment classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Words counted as positive evidence
    #[serde(default = "default_positive_words")]
    pub positive: Vec<String>,

    /// Words counted as negative evidence
    #[serde(default = "default_negative_words")]
    pub negative: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            positive: default_positive_words(),
            negative: default_negative_words(),
        }
    }
}

impl ClassifierConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| {
            Error::config(format!(
                "failed to parse classifier config {}: {e}",
                path.display()
            ))
        })
    }
}

fn default_name() -> String {
    "sentiment".to_string()
}

fn default_positive_words() -> Vec<String> {
    [
        "good",
        "great",
        "excellent",
        "love",
        "amazing",
        "wonderful",
        "happy",
        "fantastic",
        "awesome",
        "best",
        "beautiful",
        "perfect",
    ]
    .map(String::from)
    .to_vec()
}

fn default_negative_words() -> Vec<String> {
    [
        "bad",
        "terrible",
        "awful",
        "hate",
        "horrible",
        "worst",
        "sad",
        "angry",
        "disappointed",
        "poor",
        "broken",
        "useless",
    ]
    .map(String::from)
    .to_vec()
}

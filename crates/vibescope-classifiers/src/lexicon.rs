//! Lexicon-based sentiment classifier
//!
//! Counts case-insensitive hits from positive/negative word lists and
//! scores by hit ratio. Texts with no hits at all come back neutral
//! at 0.5 confidence.

use crate::classifier::{Classification, Classifier};
use crate::config::{ClassifierConfig, LexiconConfig};
use aho_corasick::AhoCorasick;
use vibescope_core::{Error, Result};

#[derive(Debug)]
pub struct LexiconSentimentClassifier {
    name: String,
    positive: AhoCorasick,
    negative: AhoCorasick,
}

impl LexiconSentimentClassifier {
    /// Build with the default word lists
    pub fn new() -> Result<Self> {
        Self::from_config(&ClassifierConfig::default())
    }

    /// Build from configuration
    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        let LexiconConfig { positive, negative } = &config.lexicon;

        if positive.is_empty() || negative.is_empty() {
            return Err(Error::config(
                "lexicon requires at least one positive and one negative word",
            ));
        }

        let positive = build_matcher(positive, "positive")?;
        let negative = build_matcher(negative, "negative")?;

        Ok(Self {
            name: config.name.clone(),
            positive,
            negative,
        })
    }
}

fn build_matcher(words: &[String], polarity: &str) -> Result<AhoCorasick> {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(words)
        .map_err(|e| Error::config(format!("failed to build {polarity} sentiment matcher: {e}")))
}

#[async_trait::async_trait]
impl Classifier for LexiconSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<Classification> {
        let positive_hits = self.positive.find_iter(text).count() as f32;
        let negative_hits = self.negative.find_iter(text).count() as f32;
        let total = positive_hits + negative_hits;

        if total == 0.0 {
            return Ok(Classification::new("neutral", 0.5));
        }

        let positive_share = positive_hits / total;
        let (label, score) = if positive_share >= 0.5 {
            ("positive", positive_share)
        } else {
            ("negative", 1.0 - positive_share)
        };

        Ok(Classification::new(label, score).with_scores(vec![
            ("negative".to_string(), 1.0 - positive_share),
            ("positive".to_string(), positive_share),
        ]))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

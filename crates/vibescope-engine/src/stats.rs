//! Derived aggregates over analysis results
//!
//! Pure functions the dashboard cards and charts are built from:
//! sentiment distribution by bucket and a keyword-based guess at which
//! platform each text came from.

use serde::Serialize;
use vibescope_core::{AnalysisResult, Sentiment};

/// Counts and shares per sentiment bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentBreakdown {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentBreakdown {
    /// Share of a bucket as a percentage of the total
    pub fn percentage(&self, bucket: Sentiment) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        let count = match bucket {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        };
        count as f32 / self.total as f32 * 100.0
    }
}

/// Bucket every result by its label
pub fn sentiment_breakdown(results: &[AnalysisResult]) -> SentimentBreakdown {
    let mut breakdown = SentimentBreakdown {
        total: results.len(),
        positive: 0,
        negative: 0,
        neutral: 0,
    };

    for result in results {
        match result.bucket() {
            Sentiment::Positive => breakdown.positive += 1,
            Sentiment::Negative => breakdown.negative += 1,
            Sentiment::Neutral => breakdown.neutral += 1,
        }
    }

    breakdown
}

/// One platform's share of the analyzed texts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSlice {
    pub name: &'static str,
    pub count: usize,
    pub percent: u32,
}

const SOURCES: &[(&str, &[&str])] = &[
    ("Twitter", &["twitter", "tweet"]),
    ("Instagram", &["instagram", "insta"]),
    ("Facebook", &["facebook", "fb"]),
    ("Web", &["web", "website"]),
    ("Forums", &["forum", "reddit"]),
];

/// Guess the platform a text came from by keyword search.
///
/// First matching source in the fixed order wins; anything else is
/// "Other".
pub fn detect_source(text: &str) -> &'static str {
    let text = text.to_lowercase();
    for (name, keywords) in SOURCES {
        if keywords.iter().any(|k| text.contains(k)) {
            return name;
        }
    }
    "Other"
}

/// Platform distribution with rounded percentage shares.
///
/// Sources with no hits are dropped. Empty input yields an empty
/// distribution.
pub fn source_breakdown(results: &[AnalysisResult]) -> Vec<SourceSlice> {
    if results.is_empty() {
        return Vec::new();
    }

    let total = results.len();
    let names: Vec<&'static str> = SOURCES
        .iter()
        .map(|(name, _)| *name)
        .chain(std::iter::once("Other"))
        .collect();

    let mut counts = vec![0usize; names.len()];
    for result in results {
        let source = detect_source(&result.text);
        let index = names.iter().position(|n| *n == source).unwrap_or(names.len() - 1);
        counts[index] += 1;
    }

    names
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(name, count)| SourceSlice {
            name,
            count,
            percent: (count as f32 / total as f32 * 100.0).round() as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(text: &str, label: &str) -> AnalysisResult {
        AnalysisResult::shape(text, label, 0.9)
    }

    #[test]
    fn breakdown_counts_every_bucket_exactly_once() {
        let results = vec![
            result("a", "POSITIVE"),
            result("b", "POSITIVE"),
            result("c", "NEGATIVE"),
            result("d", "LABEL_2"),
        ];

        let breakdown = sentiment_breakdown(&results);
        assert_eq!(breakdown.total, 4);
        assert_eq!(breakdown.positive, 2);
        assert_eq!(breakdown.negative, 1);
        assert_eq!(breakdown.neutral, 1);

        let sum = breakdown.percentage(Sentiment::Positive)
            + breakdown.percentage(Sentiment::Negative)
            + breakdown.percentage(Sentiment::Neutral);
        assert_eq!(sum, 100.0);
    }

    #[test]
    fn empty_breakdown_has_zero_percentages() {
        let breakdown = sentiment_breakdown(&[]);
        assert_eq!(breakdown.total, 0);
        assert_eq!(breakdown.percentage(Sentiment::Positive), 0.0);
    }

    #[test]
    fn source_detection_uses_keyword_priority() {
        assert_eq!(detect_source("Saw this tweet yesterday"), "Twitter");
        assert_eq!(detect_source("posted on my insta story"), "Instagram");
        assert_eq!(detect_source("from the FB group"), "Facebook");
        assert_eq!(detect_source("our website reviews"), "Web");
        assert_eq!(detect_source("a reddit thread"), "Forums");
        assert_eq!(detect_source("just an opinion"), "Other");
    }

    #[test]
    fn source_breakdown_drops_empty_sources() {
        let results = vec![
            result("great tweet", "POSITIVE"),
            result("another tweet", "POSITIVE"),
            result("random thought", "NEUTRAL"),
            result("reddit is angry", "NEGATIVE"),
        ];

        let slices = source_breakdown(&results);
        let names: Vec<_> = slices.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Twitter", "Forums", "Other"]);

        let twitter = &slices[0];
        assert_eq!(twitter.count, 2);
        assert_eq!(twitter.percent, 50);
    }
}

//! Shared mock classifiers for integration tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use vibescope_classifiers::{Classification, Classifier};
use vibescope_core::Result;

/// A configurable mock classifier for testing
#[derive(Debug)]
pub struct MockClassifier {
    name: String,
    label: String,
    score: f32,
    responses: HashMap<String, (String, f32)>,
    call_count: AtomicU32,
}

impl MockClassifier {
    /// Create a new mock classifier with the given name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            label: "neutral".to_string(),
            score: 0.5,
            responses: HashMap::new(),
            call_count: AtomicU32::new(0),
        }
    }

    /// Set the default label this classifier will return
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Set the default score this classifier will return
    pub fn with_score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Script an exact response for a specific input text
    pub fn with_response(mut self, text: &str, label: &str, score: f32) -> Self {
        self.responses
            .insert(text.to_string(), (label.to_string(), score));
        self
    }

    /// Get the number of times classify was called
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    async fn classify(&self, text: &str) -> Result<Classification> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        let (label, score) = self
            .responses
            .get(text)
            .cloned()
            .unwrap_or_else(|| (self.label.clone(), self.score));

        Ok(Classification::new(label, score))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A classifier that always fails, for testing error paths
#[derive(Debug)]
pub struct FailingClassifier {
    name: String,
    error_message: String,
}

impl FailingClassifier {
    /// Create a new failing classifier
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            error_message: "simulated classifier failure".to_string(),
        }
    }

    /// Set a custom error message
    pub fn with_error(mut self, message: &str) -> Self {
        self.error_message = message.to_string();
        self
    }
}

#[async_trait]
impl Classifier for FailingClassifier {
    async fn classify(&self, _text: &str) -> Result<Classification> {
        Err(vibescope_core::Error::classification(&self.error_message))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

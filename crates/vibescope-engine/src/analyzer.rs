//! Batch analysis orchestration
//!
//! The [`Analyzer`] takes a batch of texts through the classifier
//! gateway: validate, ensure the classifier is ready, fan out the
//! classify calls with bounded concurrency, and gather the results in
//! input order. Batches are all-or-nothing: one failed item fails the
//! whole batch and no partial results are returned. Progress and
//! failures are reported through the injected [`Notifier`].

use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use vibescope_classifiers::ClassifierGateway;
use vibescope_core::{AnalysisResult, Error, Notification, Notifier, Result};

/// Orchestrator configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Maximum classify calls in flight at once
    pub max_concurrency: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { max_concurrency: 8 }
    }
}

/// The analysis orchestrator
pub struct Analyzer {
    gateway: Arc<ClassifierGateway>,
    notifier: Arc<dyn Notifier>,
    config: AnalyzerConfig,
    in_flight: AtomicBool,
}

impl Analyzer {
    pub fn new(gateway: Arc<ClassifierGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_config(gateway, notifier, AnalyzerConfig::default())
    }

    pub fn with_config(
        gateway: Arc<ClassifierGateway>,
        notifier: Arc<dyn Notifier>,
        mut config: AnalyzerConfig,
    ) -> Self {
        config.max_concurrency = config.max_concurrency.max(1);
        Self {
            gateway,
            notifier,
            config,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a batch is currently in flight
    pub fn is_analyzing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Analyze a batch of texts, returning one result per input in
    /// input order.
    ///
    /// A second call while a batch is in flight is rejected without
    /// touching the gateway. The in-flight flag is cleared on every
    /// exit path.
    pub async fn analyze(&self, texts: &[String]) -> Result<Vec<AnalysisResult>> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            let err = Error::validation("an analysis batch is already in progress");
            self.notifier
                .notify(Notification::error("Analysis rejected", err.to_string()));
            return Err(err);
        }

        let outcome = self.run(texts).await;
        self.in_flight.store(false, Ordering::Release);
        outcome
    }

    async fn run(&self, texts: &[String]) -> Result<Vec<AnalysisResult>> {
        if let Err(e) = validate_batch(texts) {
            self.notifier
                .notify(Notification::error("Empty input", e.to_string()));
            return Err(e);
        }

        self.notifier.notify(Notification::info(
            "Initializing sentiment model",
            "Loading the classifier. This may take a moment on first use.",
        ));

        let classifier = match self.gateway.ensure_ready().await {
            Ok(classifier) => classifier,
            Err(e) => {
                tracing::warn!("classifier initialization failed: {e}");
                self.notifier
                    .notify(Notification::error("Analysis failed", e.to_string()));
                return Err(e);
            }
        };

        self.notifier.notify(Notification::info(
            "Analyzing",
            format!("Processing {} text(s)...", texts.len()),
        ));

        // buffered() preserves input order regardless of completion
        // order, and fails the whole batch on the first item error.
        let outcome = stream::iter(texts.iter().cloned().map(|text| {
            let classifier = classifier.clone();
            async move {
                classifier
                    .classify(&text)
                    .await
                    .map(|c| AnalysisResult::shape(text.clone(), c.label, c.score))
            }
        }))
        .buffered(self.config.max_concurrency)
        .try_collect::<Vec<_>>()
        .await;

        match outcome {
            Ok(results) => {
                tracing::debug!(count = results.len(), "batch analyzed");
                self.notifier.notify(Notification::success(
                    "Analysis complete",
                    format!("Successfully analyzed {} text(s)", results.len()),
                ));
                Ok(results)
            }
            Err(e) => {
                tracing::warn!("batch classification failed: {e}");
                self.notifier
                    .notify(Notification::error("Analysis failed", e.to_string()));
                Err(e)
            }
        }
    }
}

fn validate_batch(texts: &[String]) -> Result<()> {
    if texts.is_empty() {
        return Err(Error::validation("no text provided for analysis"));
    }
    if texts.iter().any(|t| t.trim().is_empty()) {
        return Err(Error::validation("blank text cannot be analyzed"));
    }
    Ok(())
}

use crate::state::{BusNotifier, EventBus, FeedEvent};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use vibescope_classifiers::ClassifierGateway;
use vibescope_core::AnalysisResult;
use vibescope_engine::{Analyzer, AnalyzerConfig};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Batch orchestrator; its notifications go to the event bus
    pub analyzer: Arc<Analyzer>,

    /// Currently displayed result set, replaced wholesale per batch
    results: Arc<RwLock<Vec<AnalysisResult>>>,

    /// Real-time event bus for WebSocket broadcasting
    pub event_bus: Arc<EventBus>,

    /// Running totals for the dashboard header
    pub totals: Arc<Totals>,
}

impl AppState {
    pub fn new(gateway: Arc<ClassifierGateway>, config: AnalyzerConfig) -> Self {
        let event_bus = Arc::new(EventBus::default());
        let notifier = Arc::new(BusNotifier::new(event_bus.clone()));
        let analyzer = Arc::new(Analyzer::with_config(gateway, notifier, config));

        Self {
            analyzer,
            results: Arc::new(RwLock::new(Vec::new())),
            event_bus,
            totals: Arc::new(Totals::default()),
        }
    }

    /// Replace the displayed result set and broadcast the new batch
    pub fn replace_results(&self, results: Vec<AnalysisResult>) {
        *self.results.write() = results.clone();
        self.event_bus.publish(FeedEvent::ResultsReplaced { results });
    }

    /// Snapshot of the currently displayed results
    pub fn current_results(&self) -> Vec<AnalysisResult> {
        self.results.read().clone()
    }
}

/// Running totals since startup
#[derive(Default)]
pub struct Totals {
    batches: AtomicU64,
    texts: AtomicU64,
    failures: AtomicU64,
}

/// Serializable view of [`Totals`]
#[derive(Debug, Clone, Serialize)]
pub struct TotalsSnapshot {
    pub batches: u64,
    pub texts: u64,
    pub failures: u64,
}

impl Totals {
    pub fn record_batch(&self, text_count: usize) {
        self.batches.fetch_add(1, Ordering::Relaxed);
        self.texts.fetch_add(text_count as u64, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> TotalsSnapshot {
        TotalsSnapshot {
            batches: self.batches.load(Ordering::Relaxed),
            texts: self.texts.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}

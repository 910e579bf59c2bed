use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast;
use vibescope_core::{AnalysisResult, Notification, Notifier};

/// Events broadcast to live-feed WebSocket clients
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedEvent {
    /// A progress or failure notification from the orchestrator
    Notification(Notification),

    /// The displayed result set was replaced by a new batch
    ResultsReplaced { results: Vec<AnalysisResult> },
}

/// Event bus for broadcasting events to WebSocket clients
pub struct EventBus {
    sender: broadcast::Sender<FeedEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent> {
        self.sender.subscribe()
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: FeedEvent) {
        // Ignore send errors (no subscribers)
        let _ = self.sender.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1024)
    }
}

/// Notifier that forwards orchestrator notifications onto the event
/// bus. `broadcast::send` never blocks, so delivery stays
/// fire-and-forget as the orchestrator requires.
pub struct BusNotifier {
    bus: Arc<EventBus>,
}

impl BusNotifier {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self { bus }
    }
}

impl Notifier for BusNotifier {
    fn notify(&self, notification: Notification) {
        self.bus.publish(FeedEvent::Notification(notification));
    }
}

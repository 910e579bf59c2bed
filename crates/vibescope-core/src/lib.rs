//! Vibescope Core
//!
//! Core types and utilities shared across Vibescope components.
//!
//! This crate provides:
//! - The canonical [`AnalysisResult`] record and sentiment bucketing
//! - Error types and result handling
//! - The fire-and-forget notification channel abstraction

pub mod error;
pub mod notify;
pub mod types;

pub use error::{Error, Result};
pub use notify::{LogNotifier, Notification, Notifier, NullNotifier, Severity};
pub use types::{AnalysisResult, Sentiment};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::notify::{Notification, Notifier, Severity};
    pub use crate::types::{AnalysisResult, Sentiment};
}

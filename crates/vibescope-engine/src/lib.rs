//! Vibescope Engine
//!
//! Orchestration for batch sentiment analysis: the [`Analyzer`] runs
//! a validated batch through the classifier gateway with bounded,
//! order-preserving fan-out, and `stats` derives the aggregates the
//! dashboard renders.

pub mod analyzer;
pub mod stats;

pub use analyzer::{Analyzer, AnalyzerConfig};
pub use stats::{
    detect_source, sentiment_breakdown, source_breakdown, SentimentBreakdown, SourceSlice,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::analyzer::{Analyzer, AnalyzerConfig};
    pub use crate::stats::{sentiment_breakdown, source_breakdown};
}

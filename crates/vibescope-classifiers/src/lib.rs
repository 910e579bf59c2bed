//! Vibescope Classifiers
//!
//! The classifier seam for Vibescope: a narrow async [`Classifier`]
//! trait, a configurable lexicon implementation that runs with no
//! model downloads, and the [`ClassifierGateway`] that amortizes one
//! expensive initialization across every analysis in the process.

pub mod classifier;
pub mod config;
pub mod gateway;
pub mod lexicon;

pub use classifier::{Classification, Classifier};
pub use config::{ClassifierConfig, LexiconConfig};
pub use gateway::ClassifierGateway;
pub use lexicon::LexiconSentimentClassifier;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{Classification, Classifier};
    pub use crate::config::ClassifierConfig;
    pub use crate::gateway::ClassifierGateway;
    pub use crate::lexicon::LexiconSentimentClassifier;
}

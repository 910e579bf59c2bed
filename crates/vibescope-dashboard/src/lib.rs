//! Vibescope Dashboard
//!
//! The serving layer: an axum API plus WebSocket live feed over the
//! analysis engine, and a CLI for offline batch runs.

pub mod cli;
pub mod server;
pub mod state;

pub use cli::*;
pub use server::*;
pub use state::*;

use std::path::PathBuf;
use std::sync::Arc;
use vibescope_classifiers::{
    Classifier, ClassifierConfig, ClassifierGateway, LexiconSentimentClassifier,
};

/// Build the gateway whose (lazy) initialization loads the classifier
/// config and constructs the lexicon classifier. Config problems
/// surface on first use, not at startup.
pub fn build_gateway(config_path: Option<PathBuf>) -> ClassifierGateway {
    ClassifierGateway::new(move || {
        let config_path = config_path.clone();
        async move {
            let config = match config_path {
                Some(path) => ClassifierConfig::from_file(path)?,
                None => ClassifierConfig::default(),
            };
            let classifier = LexiconSentimentClassifier::from_config(&config)?;
            Ok(Arc::new(classifier) as Arc<dyn Classifier>)
        }
    })
}

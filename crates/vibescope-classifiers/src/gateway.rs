//! Lazily-initialized classifier handle
//!
//! A [`ClassifierGateway`] owns the process-wide classifier singleton.
//! The first `ensure_ready` call runs the injected init future (which
//! may be slow: model download, weight loading); every later call
//! returns the cached handle. Concurrent first-callers await the same
//! in-progress initialization rather than starting their own, and a
//! failed initialization leaves the cell unset so the next call
//! retries. There is no teardown: the handle lives for the process.

use crate::classifier::{Classification, Classifier};
use futures::future::BoxFuture;
use std::sync::Arc;
use tokio::sync::OnceCell;
use vibescope_core::{Error, Result};

type InitFn = Box<dyn Fn() -> BoxFuture<'static, Result<Arc<dyn Classifier>>> + Send + Sync>;

pub struct ClassifierGateway {
    handle: OnceCell<Arc<dyn Classifier>>,
    init: InitFn,
}

impl ClassifierGateway {
    /// Create a gateway with an injected async initializer.
    pub fn new<F, Fut>(init: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<Arc<dyn Classifier>>> + Send + 'static,
    {
        Self {
            handle: OnceCell::new(),
            init: Box::new(move || Box::pin(init())),
        }
    }

    /// Create a gateway around an already-constructed classifier.
    pub fn preloaded(classifier: Arc<dyn Classifier>) -> Self {
        Self::new(move || {
            let classifier = classifier.clone();
            async move { Ok(classifier) }
        })
    }

    /// Idempotent initialization: runs the initializer at most once.
    pub async fn ensure_ready(&self) -> Result<Arc<dyn Classifier>> {
        let handle = self
            .handle
            .get_or_try_init(|| async {
                tracing::info!("initializing classifier");
                (self.init)().await.map_err(|e| match e {
                    Error::Initialization(_) => e,
                    other => Error::initialization(other.to_string()),
                })
            })
            .await?;
        Ok(handle.clone())
    }

    /// Whether initialization has already completed successfully
    pub fn is_ready(&self) -> bool {
        self.handle.initialized()
    }

    /// Convenience: ensure readiness, then classify.
    pub async fn classify(&self, text: &str) -> Result<Classification> {
        let classifier = self.ensure_ready().await?;
        classifier.classify(text).await
    }
}

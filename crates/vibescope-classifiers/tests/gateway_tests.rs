//! Gateway initialization behavior
//!
//! Covers the singleton contract: initialization work happens exactly
//! once, concurrent first-callers share one in-flight init, and a
//! failed init leaves the gateway retryable.

mod mocks;

use mocks::{FailingClassifier, MockClassifier};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use vibescope_classifiers::{Classifier, ClassifierGateway};
use vibescope_core::Error;

fn counting_gateway(init_count: Arc<AtomicU32>) -> ClassifierGateway {
    ClassifierGateway::new(move || {
        let init_count = init_count.clone();
        async move {
            init_count.fetch_add(1, Ordering::SeqCst);
            // Pretend loading takes a moment so concurrent callers overlap
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            let classifier = MockClassifier::new("mock")
                .with_label("POSITIVE")
                .with_score(0.8);
            Ok(Arc::new(classifier) as Arc<dyn Classifier>)
        }
    })
}

#[tokio::test]
async fn ensure_ready_initializes_only_once() {
    let init_count = Arc::new(AtomicU32::new(0));
    let gateway = counting_gateway(init_count.clone());

    assert!(!gateway.is_ready());

    let first = gateway.ensure_ready().await.unwrap();
    let second = gateway.ensure_ready().await.unwrap();

    assert_eq!(init_count.load(Ordering::SeqCst), 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert!(gateway.is_ready());
}

#[tokio::test]
async fn concurrent_first_callers_share_one_init() {
    let init_count = Arc::new(AtomicU32::new(0));
    let gateway = Arc::new(counting_gateway(init_count.clone()));

    let (a, b, c) = tokio::join!(
        gateway.ensure_ready(),
        gateway.ensure_ready(),
        gateway.ensure_ready()
    );

    a.unwrap();
    b.unwrap();
    c.unwrap();
    assert_eq!(init_count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_init_is_distinct_and_retryable() {
    let attempts = Arc::new(AtomicU32::new(0));
    let attempts_in_init = attempts.clone();
    let gateway = ClassifierGateway::new(move || {
        let attempts = attempts_in_init.clone();
        async move {
            if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(Error::initialization("model download failed"))
            } else {
                Ok(Arc::new(MockClassifier::new("mock")) as Arc<dyn Classifier>)
            }
        }
    });

    let err = gateway.ensure_ready().await.unwrap_err();
    assert!(matches!(err, Error::Initialization(_)));
    assert!(!gateway.is_ready());

    // The cell stayed unset, so the next call retries and succeeds
    gateway.ensure_ready().await.unwrap();
    assert!(gateway.is_ready());
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn preloaded_gateway_is_ready_after_first_use() {
    let classifier = Arc::new(
        MockClassifier::new("mock").with_response("what a great day", "POSITIVE", 0.95),
    );
    let gateway = ClassifierGateway::preloaded(classifier.clone());

    let result = gateway.classify("what a great day").await.unwrap();
    assert_eq!(result.label, "POSITIVE");
    assert_eq!(result.score, 0.95);
    assert!(gateway.is_ready());
    assert_eq!(classifier.call_count(), 1);
}

#[tokio::test]
async fn unscripted_text_falls_back_to_the_mock_defaults() {
    let classifier = Arc::new(
        MockClassifier::new("mock")
            .with_response("I love this!", "POSITIVE", 0.95)
            .with_response("This is terrible.", "NEGATIVE", 0.90),
    );
    let gateway = ClassifierGateway::preloaded(classifier.clone());

    let result = gateway.classify("I love this!").await.unwrap();
    assert_eq!(result.label, "POSITIVE");

    let result = gateway.classify("unscripted").await.unwrap();
    assert_eq!(result.label, "neutral");
    assert_eq!(result.score, 0.5);
    assert_eq!(classifier.call_count(), 2);
}

#[tokio::test]
async fn classifier_errors_pass_through_the_gateway() {
    let gateway = ClassifierGateway::preloaded(Arc::new(
        FailingClassifier::new("fail-test").with_error("model exploded"),
    ));

    let err = gateway.classify("anything").await.unwrap_err();
    assert!(matches!(err, Error::Classification(_)));
    assert!(err.to_string().contains("model exploded"));
}

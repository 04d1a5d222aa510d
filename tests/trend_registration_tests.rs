//! Integration tests for trend registration
//!
//! Each test registers into its own registry, the way a run would at startup.

use loadtest_metrics::{MetricsError, TrendMetrics, sanitize_test_name};
use prometheus::Registry;
use std::time::Duration;

fn register(test_name: &str) -> (Registry, TrendMetrics) {
    let registry = Registry::new();
    let trends = TrendMetrics::register(&registry, test_name)
        .expect("Failed to register trends");
    (registry, trends)
}

#[test]
fn test_trends_registered_with_expected_names() {
    let (registry, trends) = register("Checkout API / v2");

    assert_eq!(trends.response_length.name(), "response_length");
    assert_eq!(trends.request_time.name(), "request_time_Checkout_API___v2");
    assert!(trends.request_time.is_time());
    assert!(!trends.response_length.is_time());

    assert_eq!(registry.gather().len(), 2);
    let output = trends.render().expect("Failed to render metrics");
    assert!(output.contains("# TYPE response_length histogram"));
    assert!(output.contains("# TYPE request_time_Checkout_API___v2 histogram"));
}

#[test]
fn test_long_test_name_is_capped() {
    let long_name = "x".repeat(200);
    let (_, trends) = register(&long_name);

    let expected = format!("request_time_{}", "x".repeat(127));
    assert_eq!(trends.request_time.name(), expected);
    assert_eq!(sanitize_test_name(Some(&long_name)).len(), 127);
}

#[test]
fn test_astral_test_name_matches_utf16_width() {
    let (_, trends) = register("emoji 🚀 name");
    assert_eq!(trends.request_time.name(), "request_time_emoji____name");
}

#[test]
fn test_second_registration_in_same_registry_is_rejected() {
    let (registry, _first) = register("soak");

    match TrendMetrics::register(&registry, "other") {
        Err(MetricsError::RegistrationFailed { name, source }) => {
            assert_eq!(name, "response_length");
            assert!(matches!(source, prometheus::Error::AlreadyReg));
        }
        other => panic!("expected registration failure, got {other:?}"),
    }
}

#[test]
fn test_handles_passed_to_recorders() {
    fn record_response(trends: &TrendMetrics, elapsed: Duration, bytes: usize) {
        trends.request_time.add_duration(elapsed);
        trends.response_length.add(bytes as f64);
    }

    let (_, trends) = register("recorder");

    let worker_trends = trends.clone();
    let worker = std::thread::spawn(move || {
        for _ in 0..10 {
            record_response(&worker_trends, Duration::from_millis(100), 512);
        }
    });
    record_response(&trends, Duration::from_millis(300), 4096);
    worker.join().expect("worker panicked");

    assert_eq!(trends.request_time.sample_count(), 11);
    assert!((trends.request_time.sample_sum() - 1300.0).abs() < 1e-6);
    assert_eq!(trends.response_length.sample_count(), 11);

    let output = trends.render().expect("Failed to render metrics");
    assert!(output.contains("request_time_recorder_count 11"));
    assert!(output.contains("response_length_count 11"));
}

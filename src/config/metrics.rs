//! Snapshot of every environment-derived setting.

use serde::Serialize;

use super::{
    DEFAULT_MEDIAN_THRESHOLD_MS, DEFAULT_P95_THRESHOLD_MS, DEFAULT_TEST_NAME, TEST_NAME_ENV,
    ThresholdValue, median_threshold, p95_threshold, resolve,
};
use crate::utils::sanitize_test_name;

/// Configuration for a load-test run's metrics
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricsConfig {
    /// Sanitized test name used to derive the request-time trend name
    pub test_name: String,
    pub median_threshold: ThresholdValue,
    pub p95_threshold: ThresholdValue,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            test_name: DEFAULT_TEST_NAME.to_string(),
            median_threshold: ThresholdValue::Default(DEFAULT_MEDIAN_THRESHOLD_MS),
            p95_threshold: ThresholdValue::Default(DEFAULT_P95_THRESHOLD_MS),
        }
    }
}

impl MetricsConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            test_name: test_name_from_env(),
            median_threshold: median_threshold(),
            p95_threshold: p95_threshold(),
        }
    }
}

/// Sanitized `TEST_NAME`, or `"test"` when unset
pub fn test_name_from_env() -> String {
    sanitize_test_name(resolve(TEST_NAME_ENV, DEFAULT_TEST_NAME).raw())
}

//! Load-test metrics helper - trend registration and threshold configuration
//!
//! This crate wires a load-test run's measurements into a Prometheus registry:
//! - A `response_length` trend for response sizes
//! - A `request_time_<test>` trend named after the sanitized `TEST_NAME`
//! - Median and p95 response-time thresholds read from `MEDTIME` / `MAXTIME`
//!
//! ## Architecture
//!
//! - `config/` - Environment lookup with defaults, thresholds, and the config snapshot
//! - `services/` - Trend handles and their registration
//! - `utils/` - Test-name sanitization
//! - `error` - Error types
//!
//! ## Quick Start
//!
//! ```no_run
//! use loadtest_metrics::{TrendMetrics, median_threshold};
//! use prometheus::Registry;
//! use std::time::Duration;
//!
//! let registry = Registry::new();
//! let trends = TrendMetrics::from_env(&registry)?;
//!
//! trends.request_time.add_duration(Duration::from_millis(120));
//! trends.response_length.add(2048.0);
//!
//! println!("median threshold: {}", median_threshold());
//! # Ok::<(), loadtest_metrics::MetricsError>(())
//! ```

pub mod config;
pub mod error;
pub mod services;
pub mod utils;

pub use config::{
    EnvValue, MetricsConfig, ThresholdValue, median_threshold, median_threshold_ms, p95_threshold,
    p95_threshold_ms, resolve, test_name_from_env,
};
pub use error::{MetricsError, Result};
pub use services::{Trend, TrendMetrics};
pub use utils::sanitize_test_name;

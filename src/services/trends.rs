//! Trend metrics registered with a Prometheus registry.

use prometheus::{Histogram, HistogramOpts, Registry, TextEncoder};
use std::{fmt, time::Duration};
use tracing::info;

use crate::{
    config::test_name_from_env,
    error::{MetricsError, Result},
    utils::sanitize_test_name,
};

/// Name of the response size trend
pub const RESPONSE_LENGTH_TREND: &str = "response_length";
/// Prefix of the per-test request duration trend
pub const REQUEST_TIME_PREFIX: &str = "request_time_";

// Milliseconds, up to the default p95 threshold
const TIME_BUCKETS_MS: &[f64] = &[
    1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0, 30000.0,
    60000.0,
];

// Bytes, 128 B to 4 MiB
const SIZE_BUCKETS_BYTES: &[f64] = &[
    128.0, 512.0, 1024.0, 4096.0, 16384.0, 65536.0, 262144.0, 1048576.0, 4194304.0,
];

/// Handle to a registered trend
///
/// Cloning is cheap; all clones record into the same series.
#[derive(Clone)]
pub struct Trend {
    name: String,
    is_time: bool,
    histogram: Histogram,
}

impl Trend {
    /// Create a trend and register it with `registry`
    ///
    /// Fails when the name is not a valid metric name or is already taken.
    pub fn register(registry: &Registry, name: &str, help: &str, is_time: bool) -> Result<Self> {
        let buckets = if is_time {
            TIME_BUCKETS_MS
        } else {
            SIZE_BUCKETS_BYTES
        };
        let registration_failed = |source| MetricsError::RegistrationFailed {
            name: name.to_string(),
            source,
        };

        let opts = HistogramOpts::new(name, help).buckets(buckets.to_vec());
        let histogram = Histogram::with_opts(opts).map_err(registration_failed)?;
        registry
            .register(Box::new(histogram.clone()))
            .map_err(registration_failed)?;

        info!(name, is_time, "Registered trend");

        Ok(Self {
            name: name.to_string(),
            is_time,
            histogram,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether observations are durations in milliseconds
    pub fn is_time(&self) -> bool {
        self.is_time
    }

    /// Record one observation
    pub fn add(&self, value: f64) {
        self.histogram.observe(value);
    }

    /// Record a duration as milliseconds
    pub fn add_duration(&self, duration: Duration) {
        self.add(duration.as_secs_f64() * 1000.0);
    }

    pub fn sample_count(&self) -> u64 {
        self.histogram.get_sample_count()
    }

    pub fn sample_sum(&self) -> f64 {
        self.histogram.get_sample_sum()
    }
}

impl fmt::Debug for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trend")
            .field("name", &self.name)
            .field("is_time", &self.is_time)
            .field("sample_count", &self.sample_count())
            .finish()
    }
}

/// The trends of one load-test run
///
/// Created once at startup and passed to whatever records observations.
#[derive(Clone)]
pub struct TrendMetrics {
    pub registry: Registry,
    pub response_length: Trend,
    pub request_time: Trend,
}

impl TrendMetrics {
    /// Register both trends, naming the request-time trend after `test_name`
    ///
    /// The name is sanitized first, so a raw test name may be passed.
    pub fn register(registry: &Registry, test_name: &str) -> Result<Self> {
        let test_name = sanitize_test_name(Some(test_name));
        let request_time_name = format!("{REQUEST_TIME_PREFIX}{test_name}");

        let response_length = Trend::register(
            registry,
            RESPONSE_LENGTH_TREND,
            "Response body size in bytes",
            false,
        )?;
        let request_time = Trend::register(
            registry,
            &request_time_name,
            &format!("Request duration in milliseconds for test {test_name}"),
            true,
        )?;

        Ok(Self {
            registry: registry.clone(),
            response_length,
            request_time,
        })
    }

    /// Register both trends, naming the request-time trend after `TEST_NAME`
    pub fn from_env(registry: &Registry) -> Result<Self> {
        Self::register(registry, &test_name_from_env())
    }

    /// Render the registry in Prometheus text format
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .map_err(MetricsError::Render)
    }
}

impl fmt::Debug for TrendMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrendMetrics")
            .field("response_length", &self.response_length)
            .field("request_time", &self.request_time)
            .finish_non_exhaustive()
    }
}

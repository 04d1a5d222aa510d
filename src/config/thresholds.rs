//! Response-time thresholds.
//!
//! Each call re-reads the environment, so changing `MEDTIME` or `MAXTIME`
//! mid-run is picked up by the next call. Raw values are returned as-is;
//! callers that need a number use [`median_threshold_ms`] or
//! [`p95_threshold_ms`].

use super::{
    DEFAULT_MEDIAN_THRESHOLD_MS, DEFAULT_P95_THRESHOLD_MS, EnvValue, MEDIAN_THRESHOLD_ENV,
    P95_THRESHOLD_ENV, resolve,
};
use crate::error::{MetricsError, Result};

/// A threshold in milliseconds, either passed through from the environment
/// or the numeric default
pub type ThresholdValue = EnvValue<u64>;

/// Acceptable median request duration (`MEDTIME`, default 30000 ms)
pub fn median_threshold() -> ThresholdValue {
    resolve(MEDIAN_THRESHOLD_ENV, DEFAULT_MEDIAN_THRESHOLD_MS)
}

/// Acceptable 95th percentile request duration (`MAXTIME`, default 60000 ms)
///
/// Still read from `MAXTIME` for compatibility with existing run configs.
pub fn p95_threshold() -> ThresholdValue {
    resolve(P95_THRESHOLD_ENV, DEFAULT_P95_THRESHOLD_MS)
}

/// [`median_threshold`] parsed as milliseconds
pub fn median_threshold_ms() -> Result<u64> {
    median_threshold().as_millis(MEDIAN_THRESHOLD_ENV)
}

/// [`p95_threshold`] parsed as milliseconds
pub fn p95_threshold_ms() -> Result<u64> {
    p95_threshold().as_millis(P95_THRESHOLD_ENV)
}

impl EnvValue<u64> {
    /// Coerce the threshold to milliseconds, labelling errors with `key`
    pub(crate) fn as_millis(&self, key: &'static str) -> Result<u64> {
        match self {
            EnvValue::Default(ms) => Ok(*ms),
            EnvValue::Raw(value) => value
                .trim()
                .parse()
                .map_err(|_| MetricsError::InvalidThreshold {
                    key,
                    value: value.clone(),
                }),
        }
    }
}

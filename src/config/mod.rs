//! Configuration resolved from environment variables.
//!
//! All values are optional. Missing or empty variables fall back to the
//! defaults below; present values are passed through untouched.

pub mod env;
pub mod metrics;
pub mod thresholds;

pub use env::*;
pub use metrics::*;
pub use thresholds::*;

/// Raw test identifier used to name the request-time trend
pub const TEST_NAME_ENV: &str = "TEST_NAME";
/// Median request duration threshold override, in milliseconds
pub const MEDIAN_THRESHOLD_ENV: &str = "MEDTIME";
/// 95th percentile request duration threshold override, in milliseconds
pub const P95_THRESHOLD_ENV: &str = "MAXTIME";

pub const DEFAULT_TEST_NAME: &str = "test";
pub const DEFAULT_MEDIAN_THRESHOLD_MS: u64 = 30_000;
pub const DEFAULT_P95_THRESHOLD_MS: u64 = 60_000;

// Tests across modules mutate the same process environment
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

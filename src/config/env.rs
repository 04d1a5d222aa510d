//! Environment lookup with default fallback.

use serde::Serialize;
use std::{env, fmt};
use tracing::debug;

/// A value read from the environment, or the default used in its place
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EnvValue<T> {
    /// The variable was set to a non-empty value, kept verbatim
    Raw(String),
    /// The variable was absent or empty
    Default(T),
}

impl<T> EnvValue<T> {
    /// The raw environment value, if one was set
    pub fn raw(&self) -> Option<&str> {
        match self {
            EnvValue::Raw(value) => Some(value),
            EnvValue::Default(_) => None,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, EnvValue::Default(_))
    }
}

impl<T: fmt::Display> fmt::Display for EnvValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvValue::Raw(value) => f.write_str(value),
            EnvValue::Default(value) => value.fmt(f),
        }
    }
}

/// Read `key` from the environment, falling back to `default` when it is
/// unset or empty
///
/// The environment is read on every call. Set values are returned verbatim,
/// except that bytes which are not valid UTF-8 are replaced with U+FFFD
/// rather than treating the variable as missing.
pub fn resolve<T: fmt::Debug>(key: &str, default: T) -> EnvValue<T> {
    match env::var_os(key) {
        Some(value) if !value.is_empty() => EnvValue::Raw(value.to_string_lossy().into_owned()),
        _ => {
            debug!(key, ?default, "Environment variable unset, using default");
            EnvValue::Default(default)
        }
    }
}

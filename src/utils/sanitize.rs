//! Test-name sanitization for metric identifiers.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use crate::config::DEFAULT_TEST_NAME;

/// Longest suffix allowed in a derived trend name
pub const MAX_TEST_NAME_LEN: usize = 127;

static DISALLOWED_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_]").unwrap());

/// Turn a raw test name into a metric-safe identifier
///
/// Every character outside `[a-zA-Z0-9_]` becomes one `_` per UTF-16 code
/// unit, so characters outside the BMP become `__`. A missing or empty name
/// falls back to `"test"`. The result is capped at 127 characters.
pub fn sanitize_test_name(raw: Option<&str>) -> String {
    let mut sanitized = match raw {
        Some(name) if !name.is_empty() => {
            let replaced = DISALLOWED_CHARS.replace_all(name, |caps: &Captures| {
                "_".repeat(caps[0].chars().map(char::len_utf16).sum())
            });
            if replaced != name {
                debug!(
                    raw = %name,
                    sanitized = %replaced,
                    "Replaced disallowed characters in test name"
                );
            }
            replaced.into_owned()
        }
        _ => DEFAULT_TEST_NAME.to_string(),
    };

    // Only ASCII survives the replacement, so byte and char offsets agree
    sanitized.truncate(MAX_TEST_NAME_LEN);
    sanitized
}

//! Environment variable loading utilities
//!
//! Common patterns for reading configuration from the process environment
//! with sensible fallbacks.

use std::env;

/// Load an environment variable with a string default
pub fn load_env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Load an environment variable, treating unset and blank values as absent.
///
/// An exported-but-empty variable counts as missing, so callers never see
/// an empty credential or endpoint.
pub fn load_env_nonempty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

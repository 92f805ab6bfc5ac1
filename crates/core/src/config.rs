//! Helpers for reading typed configuration from a key lookup.
//!
//! Binaries pass `|key| std::env::var(key).ok()`; tests pass a map.

use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid(key: &'static str, value: impl Into<String>, reason: impl Display) -> Self {
        Self::Invalid {
            key,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Parse `key` with [`FromStr`], falling back to `default` when it is unset.
pub fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => Ok(value),
            Err(e) => Err(ConfigError::invalid(key, raw, e)),
        },
        None => Ok(default),
    }
}

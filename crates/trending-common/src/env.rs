//! Typed environment variable lookups
//!
//! Unset and empty variables are treated the same way. A variable that is set
//! but does not parse is an error rather than a silent fallback to the default.

use crate::error::{CommonError, Result};
use std::str::FromStr;

/// Read a variable, treating empty values as unset
pub fn env_opt(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read a required variable
pub fn env_required(name: &str) -> Result<String> {
    env_opt(name).ok_or_else(|| CommonError::MissingVar(name.to_string()))
}

/// Read a string variable with a default
pub fn env_or(name: &str, default: &str) -> String {
    env_opt(name).unwrap_or_else(|| default.to_string())
}

/// Read and parse a variable, falling back to `default` when unset
pub fn env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_opt(name) {
        Some(raw) => raw
            .parse()
            .map_err(|e| CommonError::invalid(name, raw.clone(), e)),
        None => Ok(default),
    }
}

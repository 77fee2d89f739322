//! Error types shared across the workspace

use thiserror::Error;

/// Result type alias for common operations
pub type Result<T> = std::result::Result<T, CommonError>;

/// Errors raised while resolving configuration from the environment
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommonError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {name}: '{value}' ({reason})")]
    InvalidVar {
        name: String,
        value: String,
        reason: String,
    },
}

impl CommonError {
    /// Create an invalid-variable error
    pub fn invalid(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidVar {
            name: name.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

//! Error types for the trending-videos pipeline
//!
//! Every failure is fatal to the current run. `ErrorKind` groups the variants
//! into the categories an orchestrator cares about when deciding whether to
//! rerun a failed step.

use std::time::Duration;
use thiserror::Error;
use trending_common::CommonError;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, EtlError>;

/// Coarse failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Upstream API never reported data within the probe window
    Readiness,
    /// Network or HTTP failure while extracting
    Fetch,
    /// Upstream document lacks a required field or holds an unusable value
    MalformedData,
    /// DDL, staging file or bulk-load failure
    Persistence,
    /// Invalid or missing configuration, or a step invoked out of order
    Configuration,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Readiness => "readiness",
            ErrorKind::Fetch => "fetch",
            ErrorKind::MalformedData => "malformed-data",
            ErrorKind::Persistence => "persistence",
            ErrorKind::Configuration => "configuration",
        };
        f.write_str(name)
    }
}

/// Error type for pipeline steps
#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Upstream API not ready after {attempts} attempts within {}s", .waited.as_secs_f64())]
    ReadinessTimeout { waited: Duration, attempts: u32 },

    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {status} for {url}: {body}")]
    HttpStatus {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Item {index}: missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Item {index}: invalid value '{value}' for '{field}': {reason}")]
    InvalidValue {
        index: usize,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Response has no top-level 'items' collection")]
    MissingItems,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Staging file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Staging file error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Step '{0}' requires output from an earlier step that has not run")]
    MissingInput(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EtlError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EtlError::ReadinessTimeout { .. } => ErrorKind::Readiness,
            EtlError::Network(_) | EtlError::HttpStatus { .. } | EtlError::Decode(_) => {
                ErrorKind::Fetch
            },
            EtlError::MissingField { .. }
            | EtlError::InvalidValue { .. }
            | EtlError::MissingItems => ErrorKind::MalformedData,
            EtlError::Database(_) | EtlError::Io(_) | EtlError::Csv(_) => ErrorKind::Persistence,
            EtlError::Config(_) | EtlError::MissingInput(_) => ErrorKind::Configuration,
        }
    }
}

impl From<CommonError> for EtlError {
    fn from(err: CommonError) -> Self {
        EtlError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let timeout = EtlError::ReadinessTimeout {
            waited: Duration::from_secs(20),
            attempts: 5,
        };
        assert_eq!(timeout.kind(), ErrorKind::Readiness);
        assert_eq!(
            timeout.to_string(),
            "Upstream API not ready after 5 attempts within 20s"
        );

        let status = EtlError::HttpStatus {
            status: 403,
            url: "http://localhost/videos".to_string(),
            body: "quotaExceeded".to_string(),
        };
        assert_eq!(status.kind(), ErrorKind::Fetch);

        let missing = EtlError::MissingField {
            index: 2,
            field: "title",
        };
        assert_eq!(missing.kind(), ErrorKind::MalformedData);
        assert_eq!(missing.to_string(), "Item 2: missing required field 'title'");

        let io = EtlError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.kind(), ErrorKind::Persistence);
    }

    #[test]
    fn test_missing_step_input_is_configuration() {
        let err = EtlError::MissingInput("process_video_data");
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_common_error_maps_to_configuration() {
        let err = EtlError::from(CommonError::MissingVar("YOUTUBE_API_KEY".to_string()));
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("YOUTUBE_API_KEY"));
    }
}

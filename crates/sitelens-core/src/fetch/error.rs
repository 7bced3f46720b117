//! Fetch failure taxonomy.

use thiserror::Error;

use crate::manifest::SchemaError;

/// Any reason a manifest fetch did not produce a valid analysis.
///
/// All variants collapse into the same failure state; the distinction only
/// exists for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure reported by curl (DNS, connect, timeout, TLS, ...).
    #[error("network error: {0}")]
    Network(#[from] curl::Error),
    /// The server answered with a non-2xx status.
    #[error("HTTP status {0}")]
    HttpStatus(u32),
    /// The body is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The JSON is valid but does not have the expected shape.
    #[error("invalid manifest: {0}")]
    Schema(#[from] SchemaError),
    /// The blocking fetch task panicked or was cancelled.
    #[error("fetch task failed: {0}")]
    Task(String),
}

/// Coarse failure label for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    HttpStatus,
    Parse,
    Schema,
    Task,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Network => "network",
            FailureKind::HttpStatus => "http_status",
            FailureKind::Parse => "parse",
            FailureKind::Schema => "schema",
            FailureKind::Task => "task",
        }
    }
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Network(_) => FailureKind::Network,
            FetchError::HttpStatus(_) => FailureKind::HttpStatus,
            FetchError::Parse(_) => FailureKind::Parse,
            FetchError::Schema(_) => FailureKind::Schema,
            FetchError::Task(_) => FailureKind::Task,
        }
    }
}

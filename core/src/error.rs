//! Error types for tablet-bench-core
//!
//! Two layers live here:
//!
//! - [`ErrorKind`]: the classification every failed API call is reduced to
//!   before the client loop decides what to do next.
//! - [`BenchError`]: failures of the harness itself (bad configuration,
//!   incomplete builders). These never occur inside a running client loop.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a failed API call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The table has reached its capacity (HTTP 429)
    TableFull,
    /// The addressed item does not exist (HTTP 404)
    NotFound,
    /// Anything else: transport failure, other status, undecodable body
    Unexpected,
}

impl ErrorKind {
    /// Classify an HTTP status code
    pub fn from_status(status: u16) -> Self {
        match status {
            429 => ErrorKind::TableFull,
            404 => ErrorKind::NotFound,
            _ => ErrorKind::Unexpected,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::TableFull => write!(f, "table_full"),
            ErrorKind::NotFound => write!(f, "not_found"),
            ErrorKind::Unexpected => write!(f, "unexpected"),
        }
    }
}

/// Harness error
#[derive(Debug, Error)]
pub enum BenchError {
    /// A builder was finished without a required field
    #[error("missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Configuration was present but invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// A client loop stopped, or could not be launched
    #[error("dispatch error: {0}")]
    Dispatch(String),
}

impl BenchError {
    /// Missing builder field
    pub fn missing_config(field: &'static str) -> Self {
        BenchError::MissingConfig(field)
    }

    /// Invalid configuration
    pub fn config(message: impl Into<String>) -> Self {
        BenchError::Config(message.into())
    }

    /// Client loop failure
    pub fn dispatch(message: impl Into<String>) -> Self {
        BenchError::Dispatch(message.into())
    }
}

impl From<crate::config::ConfigError> for BenchError {
    fn from(err: crate::config::ConfigError) -> Self {
        BenchError::Config(err.to_string())
    }
}

/// Result type alias
pub type BenchResult<T> = std::result::Result<T, BenchError>;

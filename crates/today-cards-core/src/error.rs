//! Error Types
//!
//! Failures of network operations and of the cache slot.

use thiserror::Error;

/// Tagged result of a network operation
pub type FetchOutcome<T> = Result<T, FetchError>;

/// Why a request did not produce a usable result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The backend could not be reached (DNS, refused connection, CORS...)
    #[error("network failure: {0}")]
    Network(String),
    /// The backend answered with a status outside 200-299
    #[error("HTTP {status}{}", details_suffix(.details))]
    Http { status: u16, details: Option<String> },
    /// Success status, but the body is absent or has the wrong shape
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The request body could not be serialized
    #[error("request encoding failed: {0}")]
    Encode(String),
}

impl FetchError {
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network(_))
    }

    /// HTTP status, if the backend was reached at all
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn details_suffix(details: &Option<String>) -> String {
    details.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

/// Cache slot failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("cache storage is unavailable")]
    Unavailable,
    #[error("could not encode snapshot: {0}")]
    Encode(String),
    #[error("could not write snapshot: {0}")]
    Write(String),
}

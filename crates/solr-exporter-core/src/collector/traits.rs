//! Transport abstraction for Solr admin endpoints.
//!
//! [`crate::collector::HttpTransport`] talks to a real server; tests use
//! [`crate::collector::mock::MockTransport`].

use std::sync::Arc;

/// Errors of a single GET.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Client could not be built.
    Client(String),
    /// Connection, timeout or protocol failure.
    Request { url: String, message: String },
    /// Server answered outside 2xx.
    Status { url: String, status: u16 },
    /// Body could not be read.
    Body { url: String, message: String },
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Client(msg) => write!(f, "failed to build HTTP client: {}", msg),
            FetchError::Request { url, message } => write!(f, "request to {} failed: {}", url, message),
            FetchError::Status { url, status } => write!(f, "HTTP status {} from {}", status, url),
            FetchError::Body { url, message } => {
                write!(f, "failed to read response body from {}: {}", url, message)
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Blocking GET returning the body of a 2xx response.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).get(url)
    }
}

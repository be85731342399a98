//! Error types for the fetch pipeline

use thiserror::Error;

/// Errors that can occur during a fetch
///
/// Every variant is terminal: the pipeline makes a single attempt and
/// returns the failure to the caller verbatim. Transformation failures
/// (HTML parse, extraction, markdown conversion) are not represented
/// here; they degrade silently inside the content processor.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Failed to build the HTTP client
    #[error("failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Malformed URL or failure to build the outbound request
    #[error("failed to build request for {url}: {reason}")]
    RequestConstruction { url: String, reason: String },

    /// The request did not complete within the configured timeout,
    /// or was cancelled in flight
    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),

    /// DNS, connection, or TLS failure reaching the target
    #[error("failed to fetch URL: {0}")]
    Network(#[source] reqwest::Error),

    /// The target returned a non-200 status
    #[error("HTTP {status}: {status_text}")]
    HttpStatus { status: u16, status_text: String },

    /// The robots.txt compliance check denied access
    #[error("access to {0} is disallowed by robots.txt")]
    RobotsDisallowed(String),

    /// Failure while reading a successful response's body stream
    #[error("failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),
}

impl FetchError {
    /// Classify a transport-level send error
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err)
        } else {
            FetchError::Network(err)
        }
    }
}

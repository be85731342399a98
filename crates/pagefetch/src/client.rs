//! Shared HTTP client construction
//!
//! The same client instance is used for both robots.txt and page
//! requests. It carries the request timeout and optional proxy; per-call
//! headers (User-Agent, Accept) are set by the components issuing the
//! request.

use crate::error::FetchError;
use std::time::Duration;

/// Default timeout for each outbound request
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the shared HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Total per-request timeout
    pub timeout: Duration,
    /// Optional proxy URL to route requests through
    pub proxy_url: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            proxy_url: None,
        }
    }
}

/// Build the shared HTTP client
pub fn build_http_client(config: &HttpClientConfig) -> Result<reqwest::Client, FetchError> {
    let mut builder = reqwest::Client::builder().timeout(config.timeout);

    if let Some(ref proxy_url) = config.proxy_url {
        let proxy = reqwest::Proxy::all(proxy_url).map_err(FetchError::ClientBuild)?;
        builder = builder.proxy(proxy);
    }

    builder.build().map_err(FetchError::ClientBuild)
}

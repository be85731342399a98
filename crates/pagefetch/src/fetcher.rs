//! Fetch orchestration
//!
//! Composes the robots checker, the HTTP client, and the content
//! processor into the single-attempt pipeline behind `fetch_url`.

use crate::error::FetchError;
use crate::processor::ContentProcessor;
use crate::robots::RobotsChecker;
use crate::types::FetchRequest;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use tracing::{debug, info, warn};
use url::Url;

/// Accept header preferring HTML
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Retrieves and processes content from the web
///
/// Holds only immutable configuration after construction; safe to share
/// between concurrent tasks. Dropping an in-flight `fetch_url` future
/// cancels the outbound request.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
    robots: RobotsChecker,
    processor: ContentProcessor,
    user_agent: String,
}

impl HttpFetcher {
    /// Create a new fetcher from its collaborators
    pub fn new(
        http: reqwest::Client,
        robots: RobotsChecker,
        processor: ContentProcessor,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            http,
            robots,
            processor,
            user_agent: user_agent.into(),
        }
    }

    /// Retrieve, transform, and window the content at `request.url`
    ///
    /// Single attempt, no retries: the robots check runs first and a
    /// denial means the page is never requested.
    pub async fn fetch_url(&self, request: &FetchRequest) -> Result<String, FetchError> {
        info!(url = %request.url, "fetching URL");

        if !self.robots.is_allowed(&request.url).await {
            warn!(url = %request.url, "access denied by robots.txt");
            return Err(FetchError::RobotsDisallowed(request.url.clone()));
        }

        let content = self.retrieve(&request.url, request.raw).await?;
        let formatted =
            self.processor
                .format_content(&content, request.start_index, request.max_length);

        info!(url = %request.url, bytes = formatted.len(), "fetch completed");
        Ok(formatted)
    }

    /// Issue the page GET and decode the response
    async fn retrieve(&self, url: &str, raw: bool) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|err| FetchError::RequestConstruction {
            url: url.to_string(),
            reason: err.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::RequestConstruction {
                url: url.to_string(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }

        let response = self
            .http
            .get(parsed)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, ACCEPT_HTML)
            .send()
            .await
            .map_err(FetchError::from_transport)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        debug!(url, status = status.as_u16(), ?content_type, "received response");

        if status != StatusCode::OK {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::BodyRead)?;
        debug!(url, bytes = body.len(), "read response body");

        let content = String::from_utf8_lossy(&body).into_owned();

        if !raw && is_html_content_type(content_type.as_deref()) {
            Ok(self.processor.process_html(&content))
        } else {
            Ok(content)
        }
    }
}

/// Whether a Content-Type header indicates HTML
fn is_html_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains("text/html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_html_content_type() {
        assert!(is_html_content_type(Some("text/html")));
        assert!(is_html_content_type(Some("text/html; charset=utf-8")));
        assert!(!is_html_content_type(Some("application/json")));
        assert!(!is_html_content_type(Some("text/plain")));
        assert!(!is_html_content_type(None));
    }
}

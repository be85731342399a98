//! Tool registration boundary
//!
//! Wires the pipeline components together from a single options struct
//! and exposes the name, description, and JSON schema the surrounding
//! service needs to register the fetch tool.

use crate::client::{build_http_client, HttpClientConfig};
use crate::error::FetchError;
use crate::fetcher::HttpFetcher;
use crate::processor::ContentProcessor;
use crate::robots::RobotsChecker;
use crate::types::FetchRequest;
use crate::DEFAULT_USER_AGENT;
use schemars::schema_for;
use std::time::Duration;

/// Tool name as registered with the tool-invocation layer
pub const TOOL_NAME: &str = "fetch";

/// Tool description for the tool-invocation layer
pub const TOOL_DESCRIPTION: &str =
    "Fetches a URL from the internet and optionally extracts its contents as markdown.";

/// Options for constructing a [`FetchTool`]
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Custom User-Agent; the default bot identity is used when unset
    pub user_agent: Option<String>,
    /// Skip robots.txt checks entirely
    pub ignore_robots: bool,
    /// Optional proxy URL for all outbound requests
    pub proxy_url: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: None,
            ignore_robots: false,
            proxy_url: None,
            timeout: HttpClientConfig::default().timeout,
        }
    }
}

/// The configured fetch tool
///
/// Construction builds the shared HTTP client once and hands it to both
/// the robots checker and the fetcher; nothing is mutated afterwards.
#[derive(Debug, Clone)]
pub struct FetchTool {
    fetcher: HttpFetcher,
}

impl FetchTool {
    /// Build the tool and its pipeline from options
    pub fn new(options: FetchOptions) -> Result<Self, FetchError> {
        let user_agent = options
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let http = build_http_client(&HttpClientConfig {
            timeout: options.timeout,
            proxy_url: options.proxy_url,
        })?;

        let robots = RobotsChecker::new(user_agent.as_str(), options.ignore_robots, http.clone());
        let fetcher = HttpFetcher::new(http, robots, ContentProcessor::new(), user_agent);

        Ok(Self { fetcher })
    }

    /// JSON schema for the tool's request arguments
    pub fn input_schema() -> serde_json::Value {
        serde_json::to_value(schema_for!(FetchRequest)).unwrap_or_default()
    }

    /// Execute a fetch request
    pub async fn execute(&self, request: &FetchRequest) -> Result<String, FetchError> {
        self.fetcher.fetch_url(request).await
    }
}

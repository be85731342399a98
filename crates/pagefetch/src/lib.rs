//! Pagefetch - robots-aware web content fetching library
//!
//! This crate fetches a remote resource over HTTP, enforcing the target
//! host's robots.txt rules before the page request is made, and converts
//! HTML responses into a readable markdown form with start/length
//! pagination.
//!
//! ## Pipeline
//!
//! A [`HttpFetcher::fetch_url`] call runs a strictly sequential pipeline:
//!
//! 1. robots.txt compliance check ([`RobotsChecker`])
//! 2. single HTTP GET of the page
//! 3. HTML-to-markdown transformation ([`ContentProcessor::process_html`])
//! 4. windowing ([`ContentProcessor::format_content`])
//!
//! All components hold only immutable configuration after construction, so
//! a fetcher can be shared freely between concurrent tasks.

mod client;
mod convert;
mod error;
mod fetcher;
mod processor;
mod readability;
mod robots;
mod tool;
mod types;

pub use client::{build_http_client, HttpClientConfig};
pub use convert::html_to_markdown;
pub use error::FetchError;
pub use fetcher::HttpFetcher;
pub use processor::{ContentProcessor, TRUNCATION_MESSAGE};
pub use readability::extract_readable;
pub use robots::RobotsChecker;
pub use tool::{FetchOptions, FetchTool, TOOL_DESCRIPTION, TOOL_NAME};
pub use types::FetchRequest;

/// Default User-Agent string sent with every outbound request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; PagefetchBot/1.0)";

//! Request type for the fetch pipeline

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Request to fetch and window a URL
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct FetchRequest {
    /// The URL to fetch (required, must be an absolute http:// or https:// URL)
    pub url: String,

    /// Maximum number of bytes of content to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Byte offset into the content to start returning from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<usize>,

    /// Return the response body as-is, without HTML simplification
    #[serde(default)]
    pub raw: bool,
}

impl FetchRequest {
    /// Create a new request for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the maximum content length
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Set the start offset
    pub fn start_index(mut self, start_index: usize) -> Self {
        self.start_index = Some(start_index);
        self
    }

    /// Request the raw body without HTML simplification
    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = FetchRequest::new("https://example.com")
            .start_index(7)
            .max_length(100)
            .raw();

        assert_eq!(req.url, "https://example.com");
        assert_eq!(req.start_index, Some(7));
        assert_eq!(req.max_length, Some(100));
        assert!(req.raw);
    }

    #[test]
    fn test_request_defaults() {
        let req = FetchRequest::new("https://example.com");
        assert!(req.start_index.is_none());
        assert!(req.max_length.is_none());
        assert!(!req.raw);
    }

    #[test]
    fn test_request_deserialization_defaults() {
        let req: FetchRequest = serde_json::from_str(r#"{"url":"https://example.com"}"#).unwrap();
        assert_eq!(req.url, "https://example.com");
        assert!(req.max_length.is_none());
        assert!(req.start_index.is_none());
        assert!(!req.raw);
    }

    #[test]
    fn test_request_serialization() {
        let req = FetchRequest::new("https://example.com").max_length(5);
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"url\":\"https://example.com\""));
        assert!(json.contains("\"max_length\":5"));
        // Unset options are omitted
        assert!(!json.contains("start_index"));
    }
}

//! Content transformation and windowing
//!
//! `process_html` never fails: each stage (main-content extraction,
//! markdown conversion) either produces a transformed value or signals
//! "keep the previous one", so a malformed or adversarial page degrades
//! to the best available representation instead of aborting the fetch.

use crate::convert::try_html_to_markdown;
use crate::readability::extract_readable;
use tracing::debug;

/// Suffix appended when `max_length` cuts the content short
pub const TRUNCATION_MESSAGE: &str =
    "\n\n[Content truncated. Use start_index to get more content.]";

/// Converts fetched HTML into readable text and applies pagination
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentProcessor;

impl ContentProcessor {
    /// Create a new content processor
    pub fn new() -> Self {
        Self
    }

    /// Convert HTML content to readable markdown
    ///
    /// Extraction failure keeps the original document; conversion
    /// failure keeps the pre-conversion HTML. The result is always the
    /// best value the pipeline reached.
    pub fn process_html(&self, html: &str) -> String {
        let extracted = extract_readable(html);
        if extracted.is_some() {
            debug!("using extracted main content");
        }
        let working = extracted.as_deref().unwrap_or(html);

        match try_html_to_markdown(working) {
            Some(markdown) => markdown,
            None => working.to_string(),
        }
    }

    /// Apply start offset and length limit to content
    ///
    /// Offsets and lengths are byte counts, snapped back to the nearest
    /// `char` boundary so slicing stays valid UTF-8. The truncation
    /// suffix is appended only when `max_length` actually shortened the
    /// remaining content.
    pub fn format_content(
        &self,
        content: &str,
        start_index: Option<usize>,
        max_length: Option<usize>,
    ) -> String {
        let start = floor_char_boundary(content, start_index.unwrap_or(0).min(content.len()));
        let remaining = &content[start..];

        if let Some(max_length) = max_length {
            if remaining.len() > max_length {
                let cut = floor_char_boundary(remaining, max_length);
                return format!("{}{}", &remaining[..cut], TRUNCATION_MESSAGE);
            }
        }

        remaining.to_string()
    }
}

/// Largest char boundary not exceeding `index`
fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

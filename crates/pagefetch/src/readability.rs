//! Readability-style main-content extraction
//!
//! Tries a priority-ordered list of selectors for the page's primary
//! content region and returns that element's HTML when it carries enough
//! text to plausibly be an article body. Navigation, sidebars, and
//! footers outside the matched element fall away with it.

use scraper::{ElementRef, Html, Selector};

/// Selectors tried in priority order
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role='main']",
    ".post-content",
    ".article-content",
    ".entry-content",
    ".content-body",
    "#content",
];

/// Minimum text length for a candidate to count as main content
const MIN_CONTENT_CHARS: usize = 200;

/// Extract the main-content HTML of a page
///
/// Returns `None` when no candidate element carries substantial text,
/// signalling the caller to keep working with the full document.
pub fn extract_readable(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for selector_str in CONTENT_SELECTORS {
        let selector = match Selector::parse(selector_str) {
            Ok(selector) => selector,
            Err(_) => continue,
        };
        if let Some(element) = document.select(&selector).next() {
            if text_length(&element) >= MIN_CONTENT_CHARS {
                return Some(element.html());
            }
        }
    }

    None
}

/// Length of an element's text with whitespace runs collapsed
fn text_length(element: &ElementRef) -> usize {
    element
        .text()
        .map(|chunk| chunk.split_whitespace().map(str::len).sum::<usize>())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE_PAGE: &str = r#"
        <!DOCTYPE html>
        <html>
        <head><title>Test</title></head>
        <body>
            <nav>Navigation links that should not appear in extracted content</nav>
            <article>
                <h1>Main Article Title</h1>
                <p>This is the main content of the article with important information
                that readers need to know about. The article contains detailed
                explanations and substantial text that provides value to the reader,
                comfortably more than the minimum threshold requires. A further
                sentence keeps the body well clear of any borderline length.</p>
            </article>
            <footer>Footer content that should not be included</footer>
        </body>
        </html>
    "#;

    const MAIN_PAGE: &str = r#"
        <html>
        <body>
            <header>Site header that should not appear</header>
            <main>
                <h1>Page Title</h1>
                <p>Main content goes here with detailed information about the topic.
                This paragraph contains substantial text that provides real value to
                readers and is long enough to be recognised as the primary content
                region of the page, with an extra sentence added so the length
                comfortably clears the substantial-content threshold.</p>
            </main>
            <aside>Sidebar content</aside>
        </body>
        </html>
    "#;

    #[test]
    fn test_extracts_article_element() {
        let extracted = extract_readable(ARTICLE_PAGE).unwrap();
        assert!(extracted.contains("Main Article Title"));
        assert!(!extracted.contains("Navigation"));
        assert!(!extracted.contains("Footer"));
    }

    #[test]
    fn test_extracts_main_element() {
        let extracted = extract_readable(MAIN_PAGE).unwrap();
        assert!(extracted.contains("Page Title"));
        assert!(!extracted.contains("Site header"));
        assert!(!extracted.contains("Sidebar"));
    }

    #[test]
    fn test_thin_candidate_rejected() {
        let html = "<html><body><article>Too short</article><p>rest</p></body></html>";
        assert!(extract_readable(html).is_none());
    }

    #[test]
    fn test_non_html_yields_none() {
        assert!(extract_readable("not html content").is_none());
    }
}

//! robots.txt compliance checking
//!
//! Before a page is fetched, the target host's robots.txt is retrieved
//! and evaluated against the request path. An unreachable or missing
//! robots.txt is treated as "no restriction declared" (fail-open); a
//! target URL that does not parse is denied (fail-closed).

use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

/// Checks whether a URL may be fetched under the target host's robots.txt
#[derive(Debug, Clone)]
pub struct RobotsChecker {
    user_agent: String,
    ignore_robots: bool,
    http: reqwest::Client,
}

/// One classified line of a robots.txt file
enum RobotsLine<'a> {
    /// `User-agent: <token>`
    UserAgent(&'a str),
    /// `Disallow: <path>`
    Disallow(&'a str),
    Other,
}

impl RobotsChecker {
    /// Create a new checker
    ///
    /// `user_agent` is both the header sent with the robots.txt request
    /// and the identity matched against `User-agent:` groups. When
    /// `ignore_robots` is set the checker allows every URL without any
    /// network call.
    pub fn new(user_agent: impl Into<String>, ignore_robots: bool, http: reqwest::Client) -> Self {
        Self {
            user_agent: user_agent.into(),
            ignore_robots,
            http,
        }
    }

    /// Check whether `target_url` may be fetched
    pub async fn is_allowed(&self, target_url: &str) -> bool {
        if self.ignore_robots {
            return true;
        }

        // Fail closed on unparseable URLs: a target we cannot interpret
        // is a target we cannot vet.
        let parsed = match Url::parse(target_url) {
            Ok(parsed) => parsed,
            Err(err) => {
                debug!(url = target_url, %err, "denying unparseable URL");
                return false;
            }
        };

        let body = match self.fetch_robots(&parsed).await {
            Some(body) => body,
            // No usable robots.txt means no restriction declared.
            None => return true,
        };

        let allowed = path_allowed(&body, parsed.path(), &self.user_agent);
        debug!(url = target_url, allowed, "robots.txt decision");
        allowed
    }

    /// Retrieve the robots.txt body for the target's scheme + host
    ///
    /// Returns `None` on any transport error or non-200 status.
    async fn fetch_robots(&self, target: &Url) -> Option<String> {
        let mut robots_url = target.clone();
        robots_url.set_path("/robots.txt");
        robots_url.set_query(None);
        robots_url.set_fragment(None);

        let response = self
            .http
            .get(robots_url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .ok()?;

        if response.status() != StatusCode::OK {
            return None;
        }

        response.text().await.ok()
    }
}

/// Evaluate robots.txt rules against a target path
///
/// Directive names are matched case-insensitively; the user-agent token
/// and the disallow path are matched case-sensitively. A `User-agent`
/// group becomes active when its token is `*` or a substring of
/// `user_agent`. Matched groups accumulate for the rest of the file;
/// blank lines and later groups never reset earlier matches.
fn path_allowed(robots_body: &str, target_path: &str, user_agent: &str) -> bool {
    let mut agent_matched = false;

    for line in robots_body.lines() {
        match classify_line(line.trim()) {
            RobotsLine::UserAgent(token) => {
                if token == "*" || user_agent.contains(token) {
                    agent_matched = true;
                }
            }
            RobotsLine::Disallow(path) if agent_matched => {
                // An empty Disallow blocks nothing.
                if path.is_empty() {
                    continue;
                }
                if path == "/" || target_path.starts_with(path) {
                    return false;
                }
            }
            _ => {}
        }
    }

    true
}

/// Classify a trimmed robots.txt line
fn classify_line(line: &str) -> RobotsLine<'_> {
    if let Some(rest) = strip_directive(line, "user-agent:") {
        RobotsLine::UserAgent(rest)
    } else if let Some(rest) = strip_directive(line, "disallow:") {
        RobotsLine::Disallow(rest)
    } else {
        RobotsLine::Other
    }
}

/// Strip a case-insensitive directive prefix, returning the trimmed value
fn strip_directive<'a>(line: &'a str, directive: &str) -> Option<&'a str> {
    let head = line.get(..directive.len())?;
    if head.eq_ignore_ascii_case(directive) {
        Some(line[directive.len()..].trim())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UA: &str = "TestBot/1.0";

    #[test]
    fn test_allowed_path() {
        let body = "User-agent: *\nDisallow: /private/";
        assert!(path_allowed(body, "/public/page", UA));
    }

    #[test]
    fn test_disallowed_path() {
        let body = "User-agent: *\nDisallow: /private/";
        assert!(!path_allowed(body, "/private/secret", UA));
    }

    #[test]
    fn test_root_disallow() {
        let body = "User-agent: *\nDisallow: /";
        assert!(!path_allowed(body, "/anything", UA));
    }

    #[test]
    fn test_empty_robots_allows_everything() {
        assert!(path_allowed("", "/anything", UA));
    }

    #[test]
    fn test_empty_disallow_is_noop() {
        let body = "User-agent: *\nDisallow:";
        assert!(path_allowed(body, "/anything", UA));
    }

    #[test]
    fn test_specific_agent_substring_match() {
        let body = "User-agent: TestBot\nDisallow: /blocked/";
        assert!(!path_allowed(body, "/blocked/page", UA));
        assert!(path_allowed(body, "/open/page", UA));
    }

    #[test]
    fn test_unrelated_agent_rules_ignored() {
        let body = "User-agent: OtherBot\nDisallow: /";
        assert!(path_allowed(body, "/anything", UA));
    }

    #[test]
    fn test_case_insensitive_directives() {
        let body = "USER-AGENT: *\nDISALLOW: /private/";
        assert!(!path_allowed(body, "/private/secret", UA));
    }

    #[test]
    fn test_agent_token_is_case_sensitive() {
        let body = "User-agent: testbot\nDisallow: /";
        assert!(path_allowed(body, "/anything", UA));
    }

    #[test]
    fn test_matched_agents_accumulate_across_groups() {
        // Once a group has matched, a later unrelated group does not
        // reset it: its Disallow lines still apply to us.
        let body = "User-agent: *\nDisallow: /private/\n\nUser-agent: OtherBot\nDisallow: /other/";
        assert!(!path_allowed(body, "/other/page", UA));
    }

    #[test]
    fn test_prefix_match_is_literal() {
        let body = "User-agent: *\nDisallow: /private";
        assert!(!path_allowed(body, "/private-data", UA));
        assert!(path_allowed(body, "/pub/private", UA));
    }

    #[tokio::test]
    async fn test_ignore_robots_short_circuits() {
        let checker = RobotsChecker::new(UA, true, reqwest::Client::new());
        // No network call is made, even for URLs that do not parse.
        assert!(checker.is_allowed("not a url").await);
        assert!(checker.is_allowed("https://example.invalid/private/x").await);
    }

    #[tokio::test]
    async fn test_unparseable_url_fails_closed() {
        let checker = RobotsChecker::new(UA, false, reqwest::Client::new());
        assert!(!checker.is_allowed("not a url").await);
    }

    #[tokio::test]
    async fn test_unreachable_robots_host_fails_open() {
        let checker = RobotsChecker::new(UA, false, reqwest::Client::new());
        // Port 9 (discard) refuses connections; the robots.txt fetch
        // fails and access is allowed.
        assert!(checker.is_allowed("http://127.0.0.1:9/page").await);
    }
}

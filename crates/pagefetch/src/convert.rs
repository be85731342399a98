//! HTML to markdown conversion
//!
//! A single-pass tag scanner that emits markdown for the common
//! structural elements and drops script/style content. It is
//! deliberately tolerant: unknown tags contribute only their text, and
//! malformed markup degrades to plain text rather than failing.

/// Tags whose content is dropped entirely
const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "iframe", "svg"];

/// Convert HTML to markdown
///
/// Returns `None` when conversion produced nothing from a non-empty
/// input, so the caller can keep the pre-conversion value instead.
pub(crate) fn try_html_to_markdown(html: &str) -> Option<String> {
    let markdown = html_to_markdown(html);
    if markdown.is_empty() && !html.trim().is_empty() {
        return None;
    }
    Some(markdown)
}

/// Convert HTML to a markdown-like plain-text representation
pub fn html_to_markdown(html: &str) -> String {
    let mut output = String::new();
    let mut skip_stack: Vec<String> = Vec::new();
    let mut list_depth: usize = 0;
    let mut in_pre = false;
    let mut in_blockquote = false;
    let mut link_href: Option<String> = None;

    let mut chars = html.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '<' {
            let mut tag = String::new();
            while let Some(&next) = chars.peek() {
                if next == '>' {
                    chars.next();
                    break;
                }
                tag.push(chars.next().unwrap());
            }

            let tag_lower = tag.to_lowercase();
            let is_closing = tag_lower.starts_with('/');
            let tag_name = if is_closing {
                tag_lower[1..].split_whitespace().next().unwrap_or("")
            } else {
                tag_lower.split_whitespace().next().unwrap_or("")
            };

            if SKIP_TAGS.contains(&tag_name) {
                if is_closing {
                    if let Some(pos) = skip_stack.iter().rposition(|t| t == tag_name) {
                        skip_stack.remove(pos);
                    }
                } else if !tag.ends_with('/') {
                    skip_stack.push(tag_name.to_string());
                }
                continue;
            }

            if !skip_stack.is_empty() {
                continue;
            }

            match tag_name {
                "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                    if !is_closing {
                        let level = tag_name[1..].parse::<usize>().unwrap_or(1);
                        output.push('\n');
                        for _ in 0..level {
                            output.push('#');
                        }
                        output.push(' ');
                    } else {
                        output.push_str("\n\n");
                    }
                }
                "p" | "div" | "section" | "article" | "main" | "header" | "footer" => {
                    if is_closing {
                        output.push_str("\n\n");
                    }
                }
                "br" => {
                    output.push('\n');
                }
                "hr" => {
                    output.push_str("\n---\n");
                }
                "ul" | "ol" => {
                    if is_closing {
                        list_depth = list_depth.saturating_sub(1);
                        if list_depth == 0 {
                            output.push('\n');
                        }
                    } else {
                        list_depth += 1;
                    }
                }
                "li" => {
                    if !is_closing {
                        output.push('\n');
                        for _ in 0..list_depth.saturating_sub(1) {
                            output.push_str("  ");
                        }
                        output.push_str("- ");
                    }
                }
                "strong" | "b" => {
                    output.push_str("**");
                }
                "em" | "i" => {
                    output.push('*');
                }
                "pre" => {
                    output.push_str("\n```\n");
                    in_pre = !is_closing;
                }
                "code" => {
                    if !in_pre {
                        output.push('`');
                    }
                }
                "blockquote" => {
                    if !is_closing {
                        in_blockquote = true;
                        output.push_str("\n> ");
                    } else {
                        in_blockquote = false;
                        output.push('\n');
                    }
                }
                "a" => {
                    if !is_closing {
                        if let Some(href) = extract_attribute(&tag, "href") {
                            output.push('[');
                            link_href = Some(href);
                        }
                    } else if let Some(href) = link_href.take() {
                        output.push_str("](");
                        output.push_str(&href);
                        output.push(')');
                    }
                }
                _ => {}
            }
        } else if skip_stack.is_empty() {
            if c == '&' {
                output.push_str(&decode_entity(&mut chars));
            } else if in_blockquote && c == '\n' {
                output.push_str("\n> ");
            } else {
                output.push(c);
            }
        }
    }

    clean_whitespace(&output)
}

/// Extract an attribute value from a raw tag body
fn extract_attribute(tag: &str, attr: &str) -> Option<String> {
    let pattern = format!("{}=", attr);
    let tag_lower = tag.to_lowercase();

    let start = tag_lower.find(&pattern)?;
    let rest = tag[start + pattern.len()..].trim_start();

    if let Some(rest) = rest.strip_prefix('"') {
        rest.find('"').map(|end| rest[..end].to_string())
    } else if let Some(rest) = rest.strip_prefix('\'') {
        rest.find('\'').map(|end| rest[..end].to_string())
    } else {
        let end = rest
            .find(|c: char| c.is_whitespace() || c == '>')
            .unwrap_or(rest.len());
        Some(rest[..end].to_string())
    }
}

/// Decode an HTML entity following an ampersand
///
/// Invalid, over-long, or unrecognised entities are replayed verbatim
/// (ampersand and all consumed characters) so no input text is lost.
fn decode_entity(chars: &mut std::iter::Peekable<std::str::Chars>) -> String {
    let mut entity = String::new();
    let mut terminated = false;

    while let Some(&next) = chars.peek() {
        if next == ';' {
            chars.next();
            terminated = true;
            break;
        }
        if next.is_whitespace() || entity.len() > 10 {
            break;
        }
        entity.push(chars.next().unwrap());
    }

    if !terminated {
        return format!("&{}", entity);
    }

    let decoded = match entity.as_str() {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" => Some(' '),
        "mdash" => Some('\u{2014}'),
        "ndash" => Some('\u{2013}'),
        "copy" => Some('\u{a9}'),
        "reg" => Some('\u{ae}'),
        _ => entity.strip_prefix('#').and_then(|num_str| {
            let code = if let Some(hex) = num_str.strip_prefix('x') {
                u32::from_str_radix(hex, 16).ok()
            } else {
                num_str.parse::<u32>().ok()
            };
            code.and_then(char::from_u32)
        }),
    };

    match decoded {
        Some(ch) => ch.to_string(),
        None => format!("&{};", entity),
    }
}

/// Collapse whitespace runs, trim, keep at most 2 consecutive newlines
fn clean_whitespace(s: &str) -> String {
    let mut result = String::new();
    let mut last_was_space = false;
    let mut newline_count = 0;

    for c in s.chars() {
        if c == '\n' {
            if last_was_space && result.ends_with(' ') {
                result.pop();
            }
            newline_count += 1;
            last_was_space = true;
            if newline_count <= 2 {
                result.push(c);
            }
        } else if c.is_whitespace() {
            newline_count = 0;
            if !last_was_space {
                result.push(' ');
                last_was_space = true;
            }
        } else {
            newline_count = 0;
            last_was_space = false;
            result.push(c);
        }
    }

    result.trim().to_string()
}

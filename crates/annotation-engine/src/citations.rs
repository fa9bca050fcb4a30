//! Citation parsing for assistant responses
//!
//! A response interleaves prose and URLs. The parser splits it into an
//! ordered token stream: `Url` tokens carry display metadata for the
//! citation badges, `Text` tokens carry the prose references between them.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::CitationToken;
use tracing::debug;

use crate::sanitize::strip_quotes;

lazy_static! {
    /// URL-shaped substrings. Close parens end the match so URLs survive
    /// parenthesized prose like "(see https://example.com)".
    static ref URL_PATTERN: Regex = Regex::new(r"https?://[^\s)]+").unwrap();

    /// Start of a numbered point, e.g. `1. ` or `12.  `
    static ref POINT_MARKER: Regex = Regex::new(r"\d+\.\s").unwrap();

    /// Leading numbered-point marker of a fragment
    static ref LEADING_MARKER: Regex = Regex::new(r"^\d+\.\s*").unwrap();
}

/// Split an assistant response into ordered citation tokens
///
/// Total over any input: an empty response yields an empty sequence, a
/// URL-free response yields only text tokens, a prose-free response yields
/// only url tokens. Token order matches left-to-right appearance.
pub fn extract_citations(text: &str) -> Vec<CitationToken> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    let mut cursor = 0;

    for m in URL_PATTERN.find_iter(text) {
        push_text_tokens(&text[cursor..m.start()], &mut tokens);
        tokens.push(url_token(m.as_str()));
        cursor = m.end();
    }
    push_text_tokens(&text[cursor..], &mut tokens);

    debug!(tokens = tokens.len(), "extracted citation tokens");
    tokens
}

fn push_text_tokens(prose: &str, tokens: &mut Vec<CitationToken>) {
    for value in segment_prose(prose) {
        tokens.push(CitationToken::Text { value });
    }
}

/// Segment a prose run into citation entries
///
/// Numbered points take priority: each entry runs from its `<digits>. `
/// marker to the next marker (or the end of the run). Runs without
/// numbered points are split on semicolons and newlines instead.
fn segment_prose(prose: &str) -> Vec<String> {
    let marker_starts: Vec<usize> = POINT_MARKER.find_iter(prose).map(|m| m.start()).collect();

    if marker_starts.is_empty() {
        return prose
            .split(|c| c == ';' || c == '\n')
            .filter_map(clean_fragment)
            .collect();
    }

    let mut entries = Vec::new();
    for (i, &start) in marker_starts.iter().enumerate() {
        let end = marker_starts.get(i + 1).copied().unwrap_or(prose.len());
        if let Some(entry) = clean_fragment(&prose[start..end]) {
            entries.push(entry);
        }
    }
    entries
}

/// Trim a raw fragment into a citation entry, or drop it if empty
///
/// Strips the leading `<digits>. ` marker and surrounding quotes. Quoted
/// entries end at the closing quote; unquoted entries shed the trailing
/// semicolon separator left between numbered points.
fn clean_fragment(raw: &str) -> Option<String> {
    let fragment = LEADING_MARKER.replace(raw.trim(), "");
    let fragment = fragment.trim();

    let fragment = if let Some(rest) = fragment.strip_prefix('"') {
        match rest.find('"') {
            Some(close) => &rest[..close],
            None => rest,
        }
    } else {
        fragment.trim_end_matches(';')
    };

    let fragment = strip_quotes(fragment).trim();
    if fragment.is_empty() {
        None
    } else {
        Some(fragment.to_string())
    }
}

fn url_token(url: &str) -> CitationToken {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let domain = match rest.find('/') {
        Some(slash) => &rest[..slash],
        None => rest,
    };

    CitationToken::Url {
        value: url.to_string(),
        domain: domain.to_string(),
        display_name: display_name(domain),
    }
}

/// Derive the badge label from a domain: drop a leading `www.`, keep the
/// first label, capitalize its first character
fn display_name(domain: &str) -> String {
    let bare = domain.strip_prefix("www.").unwrap_or(domain);
    let label = match bare.find('.') {
        Some(dot) => &bare[..dot],
        None => bare,
    };

    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}


// ============================================================================
// PROPERTY TESTS - Fuzz testing for the token stream
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: never panics on arbitrary input
        #[test]
        fn extract_citations_no_panic(input in "\\PC*") {
            let _ = extract_citations(&input);
        }

        /// Property: text tokens are never empty or padded
        #[test]
        fn text_tokens_are_trimmed_and_non_empty(input in "\\PC{0,200}") {
            for token in extract_citations(&input) {
                if let CitationToken::Text { value } = token {
                    prop_assert!(!value.is_empty());
                    prop_assert_eq!(value.trim(), value.as_str());
                }
            }
        }

        /// Property: every URL in the input surfaces as a url token, in order
        #[test]
        fn urls_surface_in_order(labels in prop::collection::vec("[a-z]{1,10}", 1..5)) {
            let input: Vec<String> = labels
                .iter()
                .map(|l| format!("https://{}.com/x", l))
                .collect();
            let tokens = extract_citations(&input.join(" "));

            let domains: Vec<String> = tokens
                .iter()
                .filter_map(|t| match t {
                    CitationToken::Url { domain, .. } => Some(domain.clone()),
                    _ => None,
                })
                .collect();
            let expected: Vec<String> =
                labels.iter().map(|l| format!("{}.com", l)).collect();
            prop_assert_eq!(domains, expected);
        }

        /// Property: pure function, identical inputs give identical output
        #[test]
        fn extraction_is_idempotent(input in "\\PC{0,200}") {
            prop_assert_eq!(extract_citations(&input), extract_citations(&input));
        }
    }
}

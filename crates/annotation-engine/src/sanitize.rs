//! Snippet cleanup helpers shared by the annotators

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Markup tags inside stored issue snippets
    static ref TAG_PATTERN: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Strip markup tags from a snippet, keeping the inner text, and trim
/// surrounding whitespace
pub fn strip_markup(text: &str) -> String {
    TAG_PATTERN.replace_all(text, "").trim().to_string()
}

/// Remove surrounding quote characters from a fragment
pub fn strip_quotes(text: &str) -> &str {
    text.trim_matches(|c| c == '"' || c == '\'')
}

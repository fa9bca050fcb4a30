//! Issue highlighting over a document's plain-text projection
//!
//! The review service stores the offending snippet as it looked when the
//! issue was raised; the live document may since have been re-wrapped or
//! re-cased. Matching is therefore whitespace-tolerant and
//! case-insensitive, but still requires the exact word sequence.

use regex::Regex;
use shared_types::{DecorationSpan, Issue};
use tracing::debug;

use crate::sanitize::strip_markup;

/// Style class applied to every highlight span
pub const ISSUE_HIGHLIGHT_CLASS: &str = "issue-highlight";

/// Build the search pattern for one issue snippet
///
/// Strips markup, splits the remaining text into words, escapes each word,
/// and joins them with `\s+` so differing line wraps between the stored
/// snippet and the live document still match. Returns `None` when nothing
/// remains after stripping (markup-only snippets are skipped).
pub fn issue_pattern(original_text: &str) -> Option<String> {
    let stripped = strip_markup(original_text);
    if stripped.is_empty() {
        return None;
    }

    let escaped: Vec<String> = stripped
        .split_whitespace()
        .map(|word| regex::escape(word))
        .collect();

    Some(format!("(?i){}", escaped.join(r"\s+")))
}

/// Compute highlight spans for every unresolved issue in the document text
///
/// Pure function of its inputs; the caller recomputes the full set on every
/// document or issue-list change. Spans from different issues may overlap
/// and are all emitted; the rendering layer layers styles.
pub fn compute_decorations(document_text: &str, issues: &[Issue]) -> Vec<DecorationSpan> {
    let mut spans = Vec::new();

    if issues.iter().all(|issue| issue.resolved) {
        return spans;
    }

    for issue in issues.iter().filter(|issue| !issue.resolved) {
        let pattern = match issue_pattern(&issue.original_text) {
            Some(pattern) => pattern,
            None => continue,
        };

        // Every literal is escaped, so compilation only fails on
        // pathological snippet sizes; such issues contribute no spans.
        if let Ok(re) = Regex::new(&pattern) {
            for m in re.find_iter(document_text) {
                spans.push(DecorationSpan {
                    start: m.start(),
                    end: m.end(),
                    style_class: ISSUE_HIGHLIGHT_CLASS.to_string(),
                });
            }
        }
    }

    debug!(
        issues = issues.len(),
        spans = spans.len(),
        "computed issue highlights"
    );
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(text: &str) -> Issue {
        Issue {
            id: "iss-1".to_string(),
            original_text: text.to_string(),
            resolved: false,
        }
    }

    fn resolved_issue(text: &str) -> Issue {
        Issue {
            resolved: true,
            ..issue(text)
        }
    }

    #[test]
    fn test_finds_exact_snippet() {
        let doc = "Tenant shall pay a late fee of 20% per day.";
        let spans = compute_decorations(doc, &[issue("late fee of 20%")]);

        assert_eq!(spans.len(), 1);
        assert_eq!(&doc[spans[0].start..spans[0].end], "late fee of 20%");
        assert_eq!(spans[0].style_class, ISSUE_HIGHLIGHT_CLASS);
    }

    #[test]
    fn test_whitespace_tolerant_match() {
        let doc = "clause about foo\nbar continues";
        let spans = compute_decorations(doc, &[issue("foo   bar")]);

        assert_eq!(spans.len(), 1);
        assert_eq!(&doc[spans[0].start..spans[0].end], "foo\nbar");
    }

    #[test]
    fn test_case_insensitive_match() {
        let doc = "the foo bar clause";
        let spans = compute_decorations(doc, &[issue("Foo Bar")]);

        assert_eq!(spans.len(), 1);
        assert_eq!(&doc[spans[0].start..spans[0].end], "foo bar");
    }

    #[test]
    fn test_markup_stripped_before_matching() {
        let doc = "Tenant waives all rights under this lease.";
        let spans = compute_decorations(doc, &[issue("<b>waives</b> <i>all rights</i>")]);

        assert_eq!(spans.len(), 1);
        assert_eq!(&doc[spans[0].start..spans[0].end], "waives all rights");
    }

    #[test]
    fn test_markup_only_issue_is_skipped() {
        let doc = "some document text";
        let spans = compute_decorations(doc, &[issue("<br/><hr/>")]);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_resolved_issues_are_excluded() {
        let doc = "late fee of 20% and deposit of $500";
        let spans = compute_decorations(
            doc,
            &[resolved_issue("late fee of 20%"), issue("deposit of $500")],
        );

        assert_eq!(spans.len(), 1);
        assert_eq!(&doc[spans[0].start..spans[0].end], "deposit of $500");
    }

    #[test]
    fn test_all_resolved_returns_empty() {
        let doc = "late fee of 20%";
        let spans = compute_decorations(doc, &[resolved_issue("late fee of 20%")]);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_no_match_contributes_nothing() {
        let doc = "entirely unrelated prose";
        let spans = compute_decorations(
            doc,
            &[issue("text that was edited away"), issue("unrelated prose")],
        );

        // The stale issue is silent; the other still matches.
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_all_occurrences_are_emitted() {
        let doc = "as is. Sold as is. Accepted AS IS.";
        let spans = compute_decorations(doc, &[issue("as is")]);
        assert_eq!(spans.len(), 3);
    }

    #[test]
    fn test_overlapping_spans_from_two_issues_are_kept() {
        let doc = "tenant waives all rights here";
        let spans =
            compute_decorations(doc, &[issue("waives all"), issue("all rights")]);

        assert_eq!(spans.len(), 2);
        assert!(spans[0].end > spans[1].start);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let doc = "penalty of $1.50 (per day) applies";
        let spans = compute_decorations(doc, &[issue("$1.50 (per day)")]);

        assert_eq!(spans.len(), 1);
        assert_eq!(&doc[spans[0].start..spans[0].end], "$1.50 (per day)");
    }

    #[test]
    fn test_empty_inputs() {
        assert!(compute_decorations("", &[issue("anything")]).is_empty());
        assert!(compute_decorations("some text", &[]).is_empty());
    }

    #[test]
    fn test_issue_pattern_escapes_and_joins() {
        let pattern = issue_pattern("a+b  c").unwrap();
        assert_eq!(pattern, r"(?i)a\+b\s+c");
    }

    #[test]
    fn test_issue_pattern_empty_for_markup_only() {
        assert!(issue_pattern("<div></div>").is_none());
        assert!(issue_pattern("   ").is_none());
    }
}

// ============================================================================
// PROPERTY TESTS - Fuzz testing for span invariants
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arbitrary_issue(text: String, resolved: bool) -> Issue {
        Issue {
            id: "prop".to_string(),
            original_text: text,
            resolved,
        }
    }

    proptest! {
        /// Property: never panics on arbitrary document and issue text
        #[test]
        fn compute_decorations_no_panic(doc in "\\PC*", snippet in "\\PC{0,40}") {
            let _ = compute_decorations(&doc, &[arbitrary_issue(snippet, false)]);
        }

        /// Property: every span is in bounds, non-inverted, and sliceable
        #[test]
        fn spans_are_in_bounds(doc in "\\PC{0,200}", snippet in "[a-zA-Z $.*+ ]{1,20}") {
            let spans = compute_decorations(&doc, &[arbitrary_issue(snippet, false)]);
            for span in &spans {
                prop_assert!(span.start < span.end);
                prop_assert!(span.end <= doc.len());
                prop_assert!(doc.is_char_boundary(span.start));
                prop_assert!(doc.is_char_boundary(span.end));
            }
        }

        /// Property: resolved issue lists never produce spans
        #[test]
        fn resolved_issues_produce_no_spans(doc in "\\PC{0,200}", snippets in prop::collection::vec("\\PC{0,20}", 0..5)) {
            let issues: Vec<Issue> = snippets
                .into_iter()
                .map(|s| arbitrary_issue(s, true))
                .collect();
            prop_assert!(compute_decorations(&doc, &issues).is_empty());
        }

        /// Property: pure function, identical inputs give identical output
        #[test]
        fn recomputation_is_idempotent(doc in "\\PC{0,200}", snippet in "[a-z ]{1,15}") {
            let issues = vec![arbitrary_issue(snippet, false)];
            let first = compute_decorations(&doc, &issues);
            let second = compute_decorations(&doc, &issues);
            prop_assert_eq!(first, second);
        }

        /// Property: a snippet embedded verbatim in the document is found
        #[test]
        fn embedded_snippet_is_found(prefix in "[a-z ]{0,30}", words in prop::collection::vec("[a-z]{1,8}", 1..4), suffix in "[a-z ]{0,30}") {
            let snippet = words.join(" ");
            let doc = format!("{} {} {}", prefix, snippet, suffix);
            let spans = compute_decorations(&doc, &[arbitrary_issue(snippet, false)]);
            prop_assert!(!spans.is_empty());
        }
    }
}

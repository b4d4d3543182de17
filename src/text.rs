//! Text helpers shared by the fitter and the fallback composer.
//!
//! All length arithmetic in this crate is in Unicode scalar values
//! (`str::chars`), never bytes, so truncation can never split a code point.

use scraper::Html;

/// Truncate to at most `max_chars` scalar values and append `...` when
/// anything was cut. Trailing whitespace left by the cut is trimmed before
/// the marker.
#[must_use]
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => {
            let truncated = &s[..idx];
            format!("{}...", truncated.trim_end())
        }
        None => s.to_string(),
    }
}

/// First `max_chars` scalar values of `s`, no marker.
#[must_use]
pub fn prefix_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Count scalar values. The unit every platform budget is measured in.
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Extract the visible text of a rich-text/HTML body.
///
/// Parses as an HTML fragment and concatenates text nodes; plain text
/// passes through unchanged apart from entity decoding.
#[must_use]
pub fn strip_html(input: &str) -> String {
    if !input.contains('<') {
        return input.to_string();
    }
    let fragment = Html::parse_fragment(input);
    fragment.root_element().text().collect::<String>()
}

/// First non-empty sentence, splitting on `.`, `!` and `?`.
/// Returns an empty string when the input has no sentence content.
#[must_use]
pub fn first_sentence(text: &str) -> &str {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .find(|segment| !segment.is_empty())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii_no_truncation() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
        assert_eq!(truncate_with_ellipsis("hello world", 50), "hello world");
    }

    #[test]
    fn truncate_ascii_with_truncation() {
        assert_eq!(truncate_with_ellipsis("hello world", 5), "hello...");
        assert_eq!(
            truncate_with_ellipsis("This is a long message", 10),
            "This is a..."
        );
    }

    #[test]
    fn truncate_at_exact_boundary() {
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn truncate_emoji_safe() {
        let s = "😀😀😀😀";
        assert_eq!(truncate_with_ellipsis(s, 2), "😀😀...");
        assert_eq!(truncate_with_ellipsis(s, 10), s);
    }

    #[test]
    fn truncated_length_stays_within_budget() {
        let long = "a".repeat(500);
        let result = truncate_with_ellipsis(&long, 255);
        assert_eq!(char_len(&result), 258);
    }

    #[test]
    fn prefix_chars_counts_scalars() {
        assert_eq!(prefix_chars("héllo", 2), "hé");
        assert_eq!(prefix_chars("hi", 10), "hi");
    }

    #[test]
    fn strip_html_removes_tags() {
        assert_eq!(
            strip_html("<p>Reds host rivals <strong>this Saturday</strong>.</p>"),
            "Reds host rivals this Saturday."
        );
    }

    #[test]
    fn strip_html_passes_plain_text_through() {
        assert_eq!(strip_html("No markup here."), "No markup here.");
    }

    #[test]
    fn strip_html_handles_nested_markup() {
        let html = "<div><h2>Match Report</h2><p>Goals from <em>two</em> strikers.</p></div>";
        let text = strip_html(html);
        assert!(text.contains("Match Report"));
        assert!(text.contains("Goals from two strikers."));
        assert!(!text.contains('<'));
    }

    #[test]
    fn first_sentence_splits_on_terminators() {
        assert_eq!(
            first_sentence("Reds win again! The table looks good."),
            "Reds win again"
        );
        assert_eq!(first_sentence("One. Two. Three."), "One");
        assert_eq!(first_sentence("No terminator at all"), "No terminator at all");
    }

    #[test]
    fn first_sentence_skips_empty_segments() {
        assert_eq!(first_sentence("...  ! Actual content here."), "Actual content here");
        assert_eq!(first_sentence("..."), "");
        assert_eq!(first_sentence(""), "");
    }
}

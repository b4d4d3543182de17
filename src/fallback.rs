//! Deterministic, network-free post composer.
//!
//! Used whenever external generation is unavailable or fails. Pure function
//! of (article, platform): no clock, no randomness, so repeated calls with
//! the same input yield identical output.

use crate::article::Article;
use crate::platform::{Platform, TWEET_CONTENT_BUDGET, TWEET_TRUNCATE_AT};
use crate::text::{char_len, first_sentence, prefix_chars, strip_html, truncate_with_ellipsis};

/// Club signature appended to every composed post: red dot, white dot.
pub const CLUB_MARKER: &str = "🔴⚪";

const INSTAGRAM_HASHTAGS: &str = "#BarnsleyFC #Tykes #YouReds";
const TIKTOK_HASHTAGS: &str = "#BarnsleyFC #football #fyp";

/// Excerpt lengths per platform.
const TWEET_EXCERPT_CHARS: usize = 100;
const INSTAGRAM_EXCERPT_CHARS: usize = 2_000;
const TIKTOK_EXCERPT_CHARS: usize = 100;

/// Compose platform copy from the article alone.
///
/// Total over the closed [`Platform`] enum: there is no failure path.
#[must_use]
pub fn compose(article: &Article, platform: Platform) -> String {
    let text = strip_html(article.summary_or_body());
    let title = &article.title;

    match platform {
        Platform::Twitter => {
            let excerpt = prefix_chars(first_sentence(&text), TWEET_EXCERPT_CHARS);
            let tweet = format!("{title}\n\n{excerpt} {CLUB_MARKER}");
            if char_len(&tweet) > TWEET_CONTENT_BUDGET {
                truncate_with_ellipsis(&tweet, TWEET_TRUNCATE_AT)
            } else {
                tweet
            }
        }
        Platform::Facebook => {
            // Facebook's ceiling is unreachable for practical article lengths.
            format!("{title}\n\n{text} {CLUB_MARKER}")
        }
        Platform::Instagram => {
            let excerpt = prefix_chars(&text, INSTAGRAM_EXCERPT_CHARS);
            let caption = format!("{title}\n\n{excerpt}\n\n{INSTAGRAM_HASHTAGS} {CLUB_MARKER}");
            cap_caption(caption, platform)
        }
        Platform::Tiktok => {
            let excerpt = prefix_chars(&text, TIKTOK_EXCERPT_CHARS);
            let caption = format!("{title}\n\n{excerpt}\n\n{TIKTOK_HASHTAGS} {CLUB_MARKER}");
            cap_caption(caption, platform)
        }
    }
}

fn cap_caption(caption: String, platform: Platform) -> String {
    let ceiling = platform.max_length();
    if char_len(&caption) > ceiling {
        truncate_with_ellipsis(&caption, ceiling - 3)
    } else {
        caption
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article::new(
            "Derby Day Preview",
            "<p>Reds host rivals this Saturday at Oakwell. Kick-off is at three.</p>",
        )
    }

    #[test]
    fn tweet_uses_first_sentence_and_marker() {
        let tweet = compose(&article(), Platform::Twitter);
        assert!(tweet.starts_with("Derby Day Preview\n\n"));
        assert!(tweet.contains("Reds host rivals this Saturday at Oakwell"));
        assert!(!tweet.contains("Kick-off"));
        assert!(tweet.ends_with(CLUB_MARKER));
        assert!(char_len(&tweet) <= TWEET_CONTENT_BUDGET);
    }

    #[test]
    fn long_tweet_is_truncated_within_budget() {
        let long = Article::new("T".repeat(300), "Body sentence here.");
        let tweet = compose(&long, Platform::Twitter);
        assert!(char_len(&tweet) <= TWEET_CONTENT_BUDGET);
        assert!(tweet.ends_with("..."));
    }

    #[test]
    fn facebook_keeps_full_text() {
        let post = compose(&article(), Platform::Facebook);
        assert!(post.contains("Kick-off is at three"));
        assert!(post.ends_with(CLUB_MARKER));
    }

    #[test]
    fn instagram_caps_at_platform_ceiling() {
        let huge = Article::new("Season Review", "word ".repeat(1_000));
        let caption = compose(&huge, Platform::Instagram);
        assert!(char_len(&caption) <= Platform::Instagram.max_length());
        assert!(caption.contains("#BarnsleyFC"));
    }

    #[test]
    fn tiktok_uses_short_excerpt_and_hashtags() {
        let caption = compose(&article(), Platform::Tiktok);
        assert!(caption.starts_with("Derby Day Preview\n\n"));
        assert!(caption.contains("#fyp"));
        assert!(char_len(&caption) <= Platform::Tiktok.max_length());
    }

    #[test]
    fn composition_is_deterministic() {
        let a = article();
        assert_eq!(compose(&a, Platform::Twitter), compose(&a, Platform::Twitter));
        assert_eq!(compose(&a, Platform::Instagram), compose(&a, Platform::Instagram));
    }

    #[test]
    fn summary_takes_precedence_over_body() {
        let a = article().with_summary("Short summary only!");
        let tweet = compose(&a, Platform::Twitter);
        assert!(tweet.contains("Short summary only"));
        assert!(!tweet.contains("Oakwell"));
    }
}

//! Final post composition and share-intent URLs.
//!
//! The presentation layer appends the link as `"{content}\n\n{url}"` and
//! gates sharing on the platform budget. Twitter and Facebook expose web
//! intents; Instagram and TikTok have no share URL, so the composed text
//! is handed back for clipboard use.

use crate::fitter::fits_budget;
use crate::platform::Platform;
use thiserror::Error;
use url::Url;

const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";
const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";

/// How to deliver a composed post to the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    /// Open this URL in a browser.
    Intent(String),
    /// No web intent exists; copy this text and paste it in the app.
    Clipboard(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareError {
    #[error("content is too long for {platform} ({length}/{max} characters)")]
    OverBudget {
        platform: Platform,
        length: usize,
        max: usize,
    },
}

/// The final post text: content, blank line, link.
#[must_use]
pub fn compose_post(content: &str, url: &str) -> String {
    format!("{content}\n\n{url}")
}

/// Build the share action for a platform, enforcing the budget first.
pub fn share_action(
    content: &str,
    platform: Platform,
    url: &str,
) -> Result<ShareAction, ShareError> {
    if !fits_budget(content, platform, url) {
        let final_post = compose_post(content, url);
        return Err(ShareError::OverBudget {
            platform,
            length: final_post.chars().count(),
            max: platform.max_length(),
        });
    }

    let action = match platform {
        Platform::Twitter => {
            let mut intent = Url::parse(TWITTER_INTENT).expect("static URL parses");
            intent
                .query_pairs_mut()
                .append_pair("text", &compose_post(content, url));
            ShareAction::Intent(intent.into())
        }
        Platform::Facebook => {
            let mut sharer = Url::parse(FACEBOOK_SHARER).expect("static URL parses");
            sharer
                .query_pairs_mut()
                .append_pair("u", url)
                .append_pair("quote", content);
            ShareAction::Intent(sharer.into())
        }
        Platform::Instagram | Platform::Tiktok => {
            ShareAction::Clipboard(compose_post(content, url))
        }
    };

    Ok(action)
}

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Target social platform. Closed enumeration: every platform carries a
/// fixed profile, and unknown platforms are rejected at parse time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Facebook,
    Instagram,
    Tiktok,
}

/// Fixed per-platform configuration: budgets, reserved URL overhead and the
/// built-in generation prompt.
#[derive(Debug, Clone, Copy)]
pub struct PlatformProfile {
    /// Human-facing platform name.
    pub name: &'static str,
    /// Hard character ceiling for the final post (content + URL + separator).
    pub max_length: usize,
    /// Characters reserved for the appended link plus separator. Only
    /// twitter counts the link against its ceiling; the other platforms
    /// append it outside the budget.
    pub url_overhead: usize,
    /// Built-in generation instruction, used when no override is stored.
    pub default_prompt: &'static str,
}

/// Twitter content budget after the reserved URL overhead: 280 - 22.
pub const TWEET_CONTENT_BUDGET: usize = 258;

/// Truncation point that leaves room for the three-char ellipsis marker.
pub const TWEET_TRUNCATE_AT: usize = 255;

const TWITTER_PROFILE: PlatformProfile = PlatformProfile {
    name: "Twitter",
    max_length: 280,
    url_overhead: 22,
    default_prompt: "Create a tweet that is professional yet engaging, aimed at football fans. \
        Use emojis effectively - a red dot followed by white dot (🔴⚪) is a favorite among \
        Barnsley fans! Keep the tone enthusiastic and community-focused.",
};

const FACEBOOK_PROFILE: PlatformProfile = PlatformProfile {
    name: "Facebook",
    max_length: 63_206,
    url_overhead: 0,
    default_prompt: "Create a Facebook post that is informative and engaging. The tone should \
        be professional but conversational, encouraging discussion and community engagement. \
        Feel free to use formatting like paragraphs and bullet points for better readability. \
        Include relevant emojis where appropriate.",
};

const INSTAGRAM_PROFILE: PlatformProfile = PlatformProfile {
    name: "Instagram",
    max_length: 2_200,
    url_overhead: 0,
    default_prompt: "Create an Instagram caption that is visually descriptive and engaging. \
        Use relevant emojis and hashtags. The tone should be more casual and vibrant than \
        other platforms while maintaining professionalism. Include our signature red and \
        white dots (🔴⚪) where appropriate.",
};

const TIKTOK_PROFILE: PlatformProfile = PlatformProfile {
    name: "TikTok",
    max_length: 2_200,
    url_overhead: 0,
    default_prompt: "Create a TikTok caption that is trendy and engaging, perfect for video \
        content. The tone should be casual and energetic, appealing to a younger audience \
        while maintaining professionalism. Use relevant emojis and hashtags that resonate \
        with football fans and the TikTok community.",
};

impl Platform {
    /// The platform's fixed profile. Total over the closed enum, so adding a
    /// platform without a profile fails to compile.
    #[must_use]
    pub const fn profile(self) -> &'static PlatformProfile {
        match self {
            Self::Twitter => &TWITTER_PROFILE,
            Self::Facebook => &FACEBOOK_PROFILE,
            Self::Instagram => &INSTAGRAM_PROFILE,
            Self::Tiktok => &TIKTOK_PROFILE,
        }
    }

    #[must_use]
    pub const fn max_length(self) -> usize {
        self.profile().max_length
    }

    #[must_use]
    pub const fn url_overhead(self) -> usize {
        self.profile().url_overhead
    }
}

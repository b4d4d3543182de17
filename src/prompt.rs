//! Prompt resolution and rendering.
//!
//! The effective instruction for a platform is: ad-hoc custom instruction
//! appended to (persisted override ?? built-in default). Override lookup is
//! read-only and failure-tolerant; a broken store degrades to the default.

use crate::article::Article;
use crate::error::PromptError;
use crate::platform::Platform;
use crate::text::prefix_chars;
use tera::{Context, Tera};

/// Read-only source of persisted per-platform prompt overrides.
///
/// `None` means "use the built-in default". Errors are absorbed by the
/// caller with a warning; they never abort generation.
pub trait PromptStore: Send + Sync {
    fn prompt_override(&self, platform: Platform) -> anyhow::Result<Option<String>>;
}

/// Store with no overrides. The default for callers without settings.
pub struct NoOverrides;

impl PromptStore for NoOverrides {
    fn prompt_override(&self, _platform: Platform) -> anyhow::Result<Option<String>> {
        Ok(None)
    }
}

const SYSTEM_TEMPLATE: &str = "\
You are a social media expert who writes engaging {{ platform }} content. \
{{ constraint }} Use emojis effectively.";

const USER_TEMPLATE: &str = "\
{{ instruction }}

Title: \"{{ title }}\"
Summary: \"{{ summary }}\"

Generate content for {{ platform }}{{ reminder }}";

const SYSTEM_NAME: &str = "system_prompt";
const USER_NAME: &str = "user_prompt";

/// Body excerpt length used as summary context when no summary exists.
const EXCERPT_CHARS: usize = 200;

const TWITTER_REMINDER: &str = ". Remember the URL will be added automatically, taking \
    22 characters total, so keep your content under 258 characters.";

/// Platform-specific constraint sentence for the system message. Twitter is
/// told to leave room for the appended link; the rest get their ceiling.
const fn platform_constraint(platform: Platform) -> &'static str {
    match platform {
        Platform::Twitter => {
            "The URL will be added automatically and will take up 20 characters plus 2 \
             newlines. Keep the tweet content under 258 characters to ensure the total \
             length with URL stays under 280 characters."
        }
        Platform::Facebook => {
            "You can use up to 63,206 characters. Format the text for readability with \
             paragraphs and bullet points where appropriate."
        }
        Platform::Instagram => {
            "You can use up to 2,200 characters. Make the caption engaging and use \
             appropriate hashtags."
        }
        Platform::Tiktok => {
            "Create a short, engaging caption suitable for TikTok with relevant hashtags."
        }
    }
}

/// Tera-backed renderer for the two prompt templates.
pub struct PromptEngine {
    tera: Tera,
}

impl PromptEngine {
    pub fn new() -> Result<Self, PromptError> {
        let mut tera = Tera::default();
        tera.add_raw_template(SYSTEM_NAME, SYSTEM_TEMPLATE)
            .map_err(|e| PromptError::Render(e.to_string()))?;
        tera.add_raw_template(USER_NAME, USER_TEMPLATE)
            .map_err(|e| PromptError::Render(e.to_string()))?;
        Ok(Self { tera })
    }

    /// System message carrying the platform length constraints.
    pub fn system_prompt(&self, platform: Platform) -> Result<String, PromptError> {
        let mut ctx = Context::new();
        ctx.insert("platform", &platform.to_string());
        ctx.insert("constraint", platform_constraint(platform));
        self.tera
            .render(SYSTEM_NAME, &ctx)
            .map_err(|e| PromptError::Render(e.to_string()))
    }

    /// User message: resolved instruction plus the article context. The
    /// summary slot gets the article summary, or the first 200 characters of
    /// the body when no summary exists — never the full body.
    pub fn user_prompt(
        &self,
        platform: Platform,
        instruction: &str,
        article: &Article,
    ) -> Result<String, PromptError> {
        let summary = match article.summary.as_deref() {
            Some(s) if !s.trim().is_empty() => s.to_string(),
            _ => prefix_chars(&article.body, EXCERPT_CHARS).to_string(),
        };

        let reminder = match platform {
            Platform::Twitter => TWITTER_REMINDER,
            _ => "",
        };

        let mut ctx = Context::new();
        ctx.insert("instruction", instruction);
        ctx.insert("title", &article.title);
        ctx.insert("summary", &summary);
        ctx.insert("platform", &platform.to_string());
        ctx.insert("reminder", reminder);
        self.tera
            .render(USER_NAME, &ctx)
            .map_err(|e| PromptError::Render(e.to_string()))
    }
}

/// Resolve the effective instruction: (override ?? default), with the ad-hoc
/// custom instruction appended when supplied. Store failures degrade to the
/// default with a warning.
pub fn resolve_instruction(
    platform: Platform,
    store: &dyn PromptStore,
    custom_instruction: Option<&str>,
) -> String {
    let base = match store.prompt_override(platform) {
        Ok(Some(override_prompt)) if !override_prompt.trim().is_empty() => override_prompt,
        Ok(_) => platform.profile().default_prompt.to_string(),
        Err(e) => {
            tracing::warn!(
                platform = %platform,
                "Failed to read prompt override, using default: {e}"
            );
            platform.profile().default_prompt.to_string()
        }
    };

    match custom_instruction {
        Some(custom) if !custom.trim().is_empty() => {
            format!("{base}\n\nAdditional instructions: {custom}")
        }
        _ => base,
    }
}

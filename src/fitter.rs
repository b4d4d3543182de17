//! The content fitter: one (article, platform) pair in, platform-ready copy
//! out, with a guaranteed local fallback.
//!
//! External failures never escape this module as errors. They are absorbed
//! into the fallback path and reported as [`GenerationWarning`] data on the
//! returned [`Outcome`], so callers can tell a user "degraded to template
//! mode" while still holding usable content.

use crate::article::Article;
use crate::error::Result;
use crate::fallback;
use crate::llm::{GenerationFailure, GenerationRequest, TextGenerator};
use crate::platform::{Platform, TWEET_CONTENT_BUDGET};
use crate::prompt::{NoOverrides, PromptEngine, PromptStore, resolve_instruction};
use crate::text::{char_len, truncate_with_ellipsis};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Newlines the caller inserts between post body and link.
const URL_SEPARATOR_LEN: usize = 2;

/// Platform copy produced by one fitting request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub text: String,
    pub platform: Platform,
    /// True when this module shortened model output to fit the budget.
    pub truncated: bool,
}

/// Non-fatal, user-visible notice that generation ran degraded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationWarning {
    #[error("no generation credential configured, using template content")]
    NotConfigured,

    #[error("generation degraded to template mode: {0}")]
    Degraded(GenerationFailure),
}

/// Result of a fitting request: always usable content, plus an optional
/// warning when the external generator was skipped or failed.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub content: GeneratedContent,
    pub warning: Option<GenerationWarning>,
}

/// Token ceilings passed to the generator. Fixed, not behaviorally
/// load-bearing (any value producing platform-appropriate length works).
const fn max_tokens_for(platform: Platform) -> u32 {
    match platform {
        Platform::Twitter => 150,
        _ => 500,
    }
}

/// Produces platform-ready social copy for one article.
///
/// Holds no per-request state; concurrent calls for different platforms or
/// articles are independent.
pub struct ContentFitter {
    generator: Option<Box<dyn TextGenerator>>,
    prompt_store: Box<dyn PromptStore>,
    engine: PromptEngine,
}

impl ContentFitter {
    /// A fitter with no external generator: every call takes the fallback
    /// path. This is the degraded mode, not an error.
    pub fn without_generator() -> Result<Self> {
        Self::new(None, Box::new(NoOverrides))
    }

    pub fn new(
        generator: Option<Box<dyn TextGenerator>>,
        prompt_store: Box<dyn PromptStore>,
    ) -> Result<Self> {
        Ok(Self {
            generator,
            prompt_store,
            engine: PromptEngine::new()?,
        })
    }

    /// Generate platform copy for `article`.
    ///
    /// Fails only on article precondition violations. External-service
    /// failures of any class (auth, rate-limit, server, malformed payload,
    /// timeout, transport) degrade to the deterministic fallback and are
    /// surfaced on [`Outcome::warning`]. At most one attempt is made against
    /// the generator per call; the fallback stands in for a retry.
    pub async fn generate(
        &self,
        article: &Article,
        platform: Platform,
        custom_instruction: Option<&str>,
    ) -> Result<Outcome> {
        article.validate()?;

        let Some(generator) = self.generator.as_deref() else {
            tracing::warn!(
                platform = %platform,
                "No generation credential configured, using fallback content"
            );
            return Ok(Outcome {
                content: self.fallback_content(article, platform),
                warning: Some(GenerationWarning::NotConfigured),
            });
        };

        let instruction =
            resolve_instruction(platform, self.prompt_store.as_ref(), custom_instruction);
        let request = GenerationRequest {
            system_prompt: self.engine.system_prompt(platform)?,
            user_prompt: self.engine.user_prompt(platform, &instruction, article)?,
            max_tokens: max_tokens_for(platform),
        };

        match generator.generate(&request).await {
            Ok(text) => {
                tracing::info!(
                    generator = generator.name(),
                    platform = %platform,
                    chars = char_len(&text),
                    "Generated social content"
                );
                Ok(Outcome {
                    content: fit_to_platform(text, platform),
                    warning: None,
                })
            }
            Err(failure) => {
                tracing::warn!(
                    generator = generator.name(),
                    platform = %platform,
                    "Generation failed, using fallback content: {failure}"
                );
                Ok(Outcome {
                    content: self.fallback_content(article, platform),
                    warning: Some(GenerationWarning::Degraded(failure)),
                })
            }
        }
    }

    fn fallback_content(&self, article: &Article, platform: Platform) -> GeneratedContent {
        GeneratedContent {
            text: fallback::compose(article, platform),
            platform,
            truncated: false,
        }
    }
}

/// Enforce the platform content budget on model output. Twitter's budget is
/// its ceiling minus the reserved URL overhead; the rest use the ceiling
/// itself (facebook's is unreachable in practice).
fn fit_to_platform(text: String, platform: Platform) -> GeneratedContent {
    let budget = match platform {
        Platform::Twitter => TWEET_CONTENT_BUDGET,
        _ => platform.max_length(),
    };

    if char_len(&text) > budget {
        GeneratedContent {
            text: truncate_with_ellipsis(&text, budget - 3),
            platform,
            truncated: true,
        }
    } else {
        GeneratedContent {
            text,
            platform,
            truncated: false,
        }
    }
}

/// Would `content` plus the appended link fit the platform ceiling?
///
/// Pure: `chars(content) + chars(url) + 2` (the two separator newlines)
/// compared against the platform's maximum. Callers gate share actions on
/// this; `generate` does not invoke it.
#[must_use]
pub fn fits_budget(content: &str, platform: Platform, url_text: &str) -> bool {
    char_len(content) + char_len(url_text) + URL_SEPARATOR_LEN <= platform.max_length()
}

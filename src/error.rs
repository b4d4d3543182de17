use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `oakwell-social`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains.
///
/// External-generation failures are intentionally absent: they are absorbed
/// into the fallback path and surfaced as [`crate::llm::GenerationFailure`]
/// warning data on the returned outcome, never as an error.
#[derive(Debug, Error)]
pub enum SocialError {
    // ── Article preconditions ───────────────────────────────────────────
    #[error("article: {0}")]
    Article(#[from] ArticleError),

    // ── Config ──────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Prompt / Template ───────────────────────────────────────────────
    #[error("prompt: {0}")]
    Prompt(#[from] PromptError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Article errors ──────────────────────────────────────────────────────────

/// Precondition violations on the input article. Fatal to the call;
/// no generation (external or fallback) is attempted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArticleError {
    #[error("article title is required")]
    MissingTitle,

    #[error("article body or summary is required")]
    MissingContent,
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Prompt / Template errors ───────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("template render failed: {0}")]
    Render(String),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, SocialError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_error_displays_correctly() {
        let err = SocialError::Article(ArticleError::MissingTitle);
        assert!(err.to_string().contains("title is required"));
    }

    #[test]
    fn config_error_displays_correctly() {
        let err = SocialError::Config(ConfigError::Validation("bad temperature".into()));
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn anyhow_interop() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let social_err: SocialError = anyhow_err.into();
        assert!(social_err.to_string().contains("something went wrong"));
    }
}

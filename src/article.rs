use crate::error::ArticleError;
use serde::{Deserialize, Serialize};

/// Input article for a fitting request. Not owned by this crate; the
/// caller supplies it per call and nothing is retained afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    /// Rich text / HTML body.
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Article {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            summary: None,
            image_url: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Preconditions for generation: non-empty title, and at least one of
    /// body / summary with non-whitespace content.
    pub fn validate(&self) -> Result<(), ArticleError> {
        if self.title.trim().is_empty() {
            return Err(ArticleError::MissingTitle);
        }

        let has_body = !self.body.trim().is_empty();
        let has_summary = self
            .summary
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty());

        if !has_body && !has_summary {
            return Err(ArticleError::MissingContent);
        }

        Ok(())
    }

    /// Summary if present, otherwise the body. Raw rich text; callers
    /// strip HTML where plain text is needed.
    #[must_use]
    pub fn summary_or_body(&self) -> &str {
        match self.summary.as_deref() {
            Some(summary) if !summary.trim().is_empty() => summary,
            _ => &self.body,
        }
    }
}

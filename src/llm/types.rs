use thiserror::Error;

/// One generation request against an external text generator.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    /// Token ceiling for the completion. Not behaviorally load-bearing;
    /// any value that reliably yields platform-appropriate length works.
    pub max_tokens: u32,
}

/// Classified, non-fatal failure from the external generator.
///
/// Every class is handled identically (fall back to the local composer);
/// the classification only tailors the user-visible warning text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationFailure {
    #[error("{provider} API key is invalid or expired")]
    Auth { provider: String },

    #[error("{provider} rate limit exceeded, try again in a moment")]
    RateLimited { provider: String },

    #[error("{provider} service is temporarily unavailable ({status})")]
    Server { provider: String, status: u16 },

    #[error("invalid response format from {provider}")]
    Malformed { provider: String },

    #[error("{provider} request timed out")]
    Timeout { provider: String },

    #[error("{provider} request failed: {message}")]
    Transport { provider: String, message: String },
}

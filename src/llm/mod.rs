// ── Infrastructure ───────────────────────────────────────────────────────────
pub mod http_client;
pub mod scrub;
pub mod traits;
pub mod types;

// ── Generator implementations ────────────────────────────────────────────────
pub mod openai;

// ── Re-exports ───────────────────────────────────────────────────────────────
pub use http_client::build_provider_client_with_timeout;
pub use openai::{DEFAULT_MODEL, DEFAULT_TEMPERATURE, OpenAiGenerator};
pub use scrub::{sanitize_api_error, scrub_secret_patterns};
pub use traits::TextGenerator;
pub use types::{GenerationFailure, GenerationRequest};

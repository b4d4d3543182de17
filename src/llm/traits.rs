use super::types::{GenerationFailure, GenerationRequest};
use std::future::Future;
use std::pin::Pin;

/// External text-generation collaborator.
///
/// One attempt per call; retries are not part of this contract, the
/// deterministic fallback composer stands in for them. Failures come
/// back classified rather than as opaque errors so callers can absorb them
/// without exception-style control flow.
pub trait TextGenerator: Send + Sync {
    /// Generator identifier (e.g. "openai").
    fn name(&self) -> &str;

    fn generate<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, GenerationFailure>> + Send + 'a>>;
}

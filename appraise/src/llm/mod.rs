//! Completion service capability.
//!
//! [`Reviewer`](crate::Reviewer) depends on a callable that turns a prompt into
//! generated text; this module defines the trait, the real OpenAI-backed
//! implementation, and a mock for tests.

mod mock;
mod openai;

pub use mock::MockCompletion;
pub use openai::OpenAICompletion;

use async_trait::async_trait;

use crate::error::CompletionError;

/// Text-completion capability: one prompt in, generated text out.
///
/// Exactly one synchronous call per review; no retries, no timeout. The model
/// identifier and output-token budget come from the caller so the same client
/// serves any configuration.
///
/// **Interaction**: Implemented by [`OpenAICompletion`] (real API) and
/// [`MockCompletion`] (tests); called by [`crate::Reviewer`].
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Submits `prompt` to the service and returns the generated text.
    async fn complete(
        &self,
        prompt: &str,
        model: &str,
        max_output_tokens: u32,
    ) -> Result<String, CompletionError>;
}

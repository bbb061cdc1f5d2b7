//! The relay: validate the request, build the prompt, make one completion
//! call, return trimmed text.

use std::sync::Arc;

use tracing::debug;

use crate::error::ReviewError;
use crate::llm::CompletionClient;
use crate::prompt::build_review_prompt;
use crate::request::ReviewRequest;

/// Turns a [`ReviewRequest`] into generated review text.
///
/// Model name and output-token budget are construction parameters, not ambient
/// globals, so tests substitute a [`MockCompletion`](crate::MockCompletion).
/// Holds no per-request state; one instance is shared across requests.
pub struct Reviewer {
    client: Arc<dyn CompletionClient>,
    model: String,
    max_output_tokens: u32,
}

impl Reviewer {
    pub fn new(client: Arc<dyn CompletionClient>, model: impl Into<String>, max_output_tokens: u32) -> Self {
        Self {
            client,
            model: model.into(),
            max_output_tokens,
        }
    }

    /// Runs the full pipeline for one request.
    ///
    /// A blank address fails with [`ReviewError::MissingAddress`] before any
    /// upstream contact. Otherwise exactly one completion call is made; its
    /// failure propagates as [`ReviewError::Completion`].
    pub async fn review(&self, req: &ReviewRequest) -> Result<String, ReviewError> {
        if req.trimmed_address().is_empty() {
            return Err(ReviewError::MissingAddress);
        }

        let prompt = build_review_prompt(req);
        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            comps = req.comps.len(),
            rent_comps = req.rent_comps.len(),
            "requesting review completion"
        );

        let text = self
            .client
            .complete(&prompt, &self.model, self.max_output_tokens)
            .await?;
        Ok(text.trim().to_string())
    }
}

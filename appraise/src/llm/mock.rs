//! Mock completion client for tests.
//!
//! Returns a fixed reply or a fixed error, and records the call count and the
//! last prompt so tests can assert exactly-one-call and prompt content.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::CompletionError;
use crate::llm::CompletionClient;

/// Mock completion: fixed reply or fixed error message.
///
/// **Interaction**: Implements [`CompletionClient`]; used by `Reviewer` unit
/// tests and the serve crate's e2e tests.
pub struct MockCompletion {
    /// `Ok` reply text, or `Err` message surfaced as [`CompletionError::Api`].
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockCompletion {
    /// Creates a mock that returns the given text on every call.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Creates a mock that fails every call with an API error carrying `message`.
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Number of `complete` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The prompt from the most recent call, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|g| g.clone())
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn complete(
        &self,
        prompt: &str,
        _model: &str,
        _max_output_tokens: u32,
    ) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut g) = self.last_prompt.lock() {
            *g = Some(prompt.to_string());
        }
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(CompletionError::Api(message.clone())),
        }
    }
}

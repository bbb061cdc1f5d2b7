//! OpenAI Chat Completions client implementing [`CompletionClient`].
//!
//! Sends the assembled prompt as a single user message with the configured
//! model and output-token budget. Requires an API key (explicit via
//! [`OpenAICompletion::with_api_key`], or `OPENAI_API_KEY` from the
//! environment with [`OpenAICompletion::new`]).
//!
//! **Interaction**: Implements [`CompletionClient`]; constructed once at
//! server start and shared across requests. Depends on `async_openai`.

use async_trait::async_trait;
use tracing::{debug, trace};

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
        CreateChatCompletionRequestArgs,
    },
    Client,
};

use crate::error::CompletionError;
use crate::llm::CompletionClient;

/// OpenAI Chat Completions client.
pub struct OpenAICompletion {
    client: Client<OpenAIConfig>,
    temperature: Option<f32>,
}

impl OpenAICompletion {
    /// Build client with default config (API key from `OPENAI_API_KEY` env).
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            temperature: None,
        }
    }

    /// Build client with an explicit API key.
    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self::with_config(OpenAIConfig::new().with_api_key(key))
    }

    /// Build client with custom config (e.g. custom base URL for a proxy).
    pub fn with_config(config: OpenAIConfig) -> Self {
        Self {
            client: Client::with_config(config),
            temperature: None,
        }
    }

    /// Set temperature (0–2). Lower values are more deterministic.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Returns the chat completions URL used for logging (base from
    /// OPENAI_BASE_URL or OPENAI_API_BASE env, else default). Does not append
    /// /v1 when base already ends with /v1.
    fn chat_completions_url() -> String {
        let base = std::env::var("OPENAI_BASE_URL")
            .or_else(|_| std::env::var("OPENAI_API_BASE"))
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let base = base.trim_end_matches('/');
        if base.ends_with("/v1") {
            format!("{}/chat/completions", base)
        } else {
            format!("{}/v1/chat/completions", base)
        }
    }
}

impl Default for OpenAICompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for OpenAICompletion {
    async fn complete(
        &self,
        prompt: &str,
        model: &str,
        max_output_tokens: u32,
    ) -> Result<String, CompletionError> {
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(model);
        args.messages(vec![ChatCompletionRequestMessage::User(
            ChatCompletionRequestUserMessage::from(prompt),
        )]);
        args.max_completion_tokens(max_output_tokens);
        if let Some(t) = self.temperature {
            args.temperature(t);
        }

        let request = args
            .build()
            .map_err(|e| CompletionError::InvalidRequest(e.to_string()))?;

        let url = Self::chat_completions_url();
        debug!(
            url = %url,
            model = %model,
            max_output_tokens = max_output_tokens,
            prompt_len = prompt.len(),
            "OpenAI chat create"
        );
        trace!(url = %url, prompt = %prompt, "OpenAI request prompt");

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| CompletionError::Api(e.to_string()))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyCompletion)?;

        let content = choice.message.content.unwrap_or_default();
        trace!(url = %url, response_len = content.len(), "OpenAI response");
        Ok(content)
    }
}

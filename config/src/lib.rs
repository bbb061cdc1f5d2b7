//! Process configuration for the review server: load project `.env`, then read
//! typed [`Settings`] from the environment. Existing process env always wins
//! over `.env` (dotenv never overwrites).

use std::path::Path;
use thiserror::Error;

/// Default completion model when `REVIEW_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Default output-token budget when `REVIEW_MAX_OUTPUT_TOKENS` is unset.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 400;
/// Default listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Error, Debug)]
pub enum LoadError {
    /// The API credential is absent; the server cannot start without it.
    #[error("OPENAI_API_KEY is not set (put it in the environment or a .env file)")]
    MissingApiKey,
}

/// Typed settings for one server process.
///
/// Built once at startup from the environment; passed explicitly into the
/// server rather than read ambiently, so tests can construct their own.
#[derive(Clone, Debug)]
pub struct Settings {
    /// OpenAI API credential (`OPENAI_API_KEY`).
    pub api_key: String,
    /// Listen port (`PORT`, default 8080).
    pub port: u16,
    /// Completion model identifier (`REVIEW_MODEL`).
    pub model: String,
    /// Max output tokens per completion (`REVIEW_MAX_OUTPUT_TOKENS`).
    pub max_output_tokens: u32,
}

/// Loads `.env` from `override_dir` (or the current directory) when present.
/// Missing file is fine; existing env vars are never overwritten.
pub fn load_dotenv(override_dir: Option<&Path>) {
    match override_dir {
        Some(dir) => {
            let _ = dotenv::from_path(dir.join(".env"));
        }
        None => {
            let _ = dotenv::dotenv();
        }
    }
}

impl Settings {
    /// Reads settings from the environment.
    ///
    /// `OPENAI_API_KEY` is required; the numeric keys fall back to their
    /// defaults when unset or unparsable.
    pub fn from_env() -> Result<Self, LoadError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(LoadError::MissingApiKey)?;
        Ok(Self {
            api_key,
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            model: std::env::var("REVIEW_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            max_output_tokens: std::env::var("REVIEW_MAX_OUTPUT_TOKENS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS),
        })
    }
}

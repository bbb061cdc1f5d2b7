//! Error types for the review pipeline and the completion capability.

use thiserror::Error;

/// Failure from the external completion service or request construction.
///
/// Returned by [`crate::CompletionClient::complete`]. No retry is attempted;
/// callers surface the Display string to the operator log and the API client.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The chat request could not be built (e.g. invalid parameter).
    #[error("request build failed: {0}")]
    InvalidRequest(String),

    /// The API call failed: network, auth, quota, or a malformed reply.
    #[error("OpenAI API error: {0}")]
    Api(String),

    /// The service answered but returned no choices.
    #[error("OpenAI returned no choices")]
    EmptyCompletion,
}

/// Review pipeline error.
///
/// `MissingAddress` is the only validation failure and maps to HTTP 400;
/// everything from the completion service maps to HTTP 500.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Address was empty after trimming; the completion service is not contacted.
    #[error("Address is required.")]
    MissingAddress,

    /// The completion call failed.
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

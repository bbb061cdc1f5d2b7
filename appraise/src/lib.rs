//! Appraise: property investment reviews generated by a chat-completion service.
//!
//! The pipeline is validate → build prompt → one completion call → trimmed text.
//! [`Reviewer`] is the relay; [`CompletionClient`] is the capability it calls.
//! Implementations: [`OpenAICompletion`] (real API), [`MockCompletion`] (tests).
//!
//! **Public API**: [`ReviewRequest`], [`Reviewer`], [`build_review_prompt`],
//! [`CompletionClient`], [`OpenAICompletion`], [`MockCompletion`],
//! [`ReviewError`], [`CompletionError`].

mod error;
mod llm;
mod prompt;
mod request;
mod reviewer;

pub use error::{CompletionError, ReviewError};
pub use llm::{CompletionClient, MockCompletion, OpenAICompletion};
pub use prompt::build_review_prompt;
pub use request::{RentComp, RentCompRecord, ReviewRequest, SaleComp};
pub use reviewer::Reviewer;

//! HTTP server for appraise (axum).
//!
//! Serves the review form at `GET /` and the review endpoint at `POST /review`.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`].

mod app;
mod page;
mod response;

use std::sync::Arc;

use appraise::{OpenAICompletion, Reviewer};
use tokio::net::TcpListener;
use tracing::info;

use app::{router, AppState};

/// Runs the server on an existing listener with an injected reviewer.
/// Used by tests (bind to 127.0.0.1:0, pass a reviewer over a mock client).
pub async fn run_serve_on_listener(
    listener: TcpListener,
    reviewer: Arc<Reviewer>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    info!("review server listening on http://{}", addr);

    let state = Arc::new(AppState { reviewer });
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Runs the server with the real OpenAI client built from `settings`.
/// Binds 0.0.0.0 on the configured port.
pub async fn run_serve(
    settings: &config::Settings,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let listener = TcpListener::bind(("0.0.0.0", settings.port)).await?;
    let client = Arc::new(OpenAICompletion::with_api_key(settings.api_key.clone()));
    let reviewer = Arc::new(Reviewer::new(
        client,
        settings.model.clone(),
        settings.max_output_tokens,
    ));
    run_serve_on_listener(listener, reviewer).await
}

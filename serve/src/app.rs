//! Axum app: state, router, and the form/review handlers.
//!
//! Two routes: `GET /` returns the embedded form page, `POST /review` runs the
//! review pipeline. State is one shared [`Reviewer`]; no per-request state.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use tracing::error;

use appraise::{ReviewError, ReviewRequest, Reviewer};

use crate::page::FORM_PAGE;
use crate::response::ReviewResponse;

/// Shared state: the reviewer, cloned per request via Arc.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) reviewer: Arc<Reviewer>,
}

/// Builds the router: `GET /` (form page) and `POST /review`.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/review", post(review))
        .with_state(state)
}

/// Handles `GET /`: the static form page.
async fn index() -> Html<&'static str> {
    Html(FORM_PAGE)
}

/// Handles `POST /review`: 400 for a blank address, 200 with the review text,
/// 500 with the upstream message on completion failure.
async fn review(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReviewRequest>,
) -> (StatusCode, Json<ReviewResponse>) {
    match state.reviewer.review(&req).await {
        Ok(text) => (StatusCode::OK, Json(ReviewResponse::Review { review: text })),
        Err(err) => {
            let status = match &err {
                ReviewError::MissingAddress => StatusCode::BAD_REQUEST,
                ReviewError::Completion(detail) => {
                    error!("review completion failed: {}", detail);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            (status, Json(ReviewResponse::Error { error: err.to_string() }))
        }
    }
}

//! Shared helpers for e2e tests: spawn the server on an ephemeral port with a
//! mock completion client, return the base URL for reqwest calls.

use std::sync::Arc;

use appraise::{MockCompletion, Reviewer};
use tokio::net::TcpListener;

pub const TEST_MODEL: &str = "test-model";

/// Binds 127.0.0.1:0 and spawns the server with a reviewer over `mock`.
/// Returns (base_url, server_handle); abort the handle when done.
pub async fn spawn_server(
    mock: Arc<MockCompletion>,
) -> (
    String,
    tokio::task::JoinHandle<Result<(), Box<dyn std::error::Error + Send + Sync>>>,
) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = format!("http://{}", addr);
    let reviewer = Arc::new(Reviewer::new(mock, TEST_MODEL, 400));
    let handle = tokio::spawn(serve::run_serve_on_listener(listener, reviewer));
    (url, handle)
}

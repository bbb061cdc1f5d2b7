use std::sync::Arc;

use appraise::MockCompletion;

use super::common;

#[tokio::test]
async fn e2e_malformed_json_body_is_client_error() {
    let mock = Arc::new(MockCompletion::with_reply("unused"));
    let (url, server_handle) = common::spawn_server(mock.clone()).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/review", url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert!(
        resp.status().is_client_error(),
        "expected 4xx, got {}",
        resp.status()
    );
    assert_eq!(mock.calls(), 0);
    server_handle.abort();
}

use std::sync::Arc;

use appraise::MockCompletion;
use serde_json::json;

use super::common;

#[tokio::test]
async fn e2e_upstream_failure_is_500_with_error_message() {
    let mock = Arc::new(MockCompletion::with_error("simulated quota rejection"));
    let (url, server_handle) = common::spawn_server(mock.clone()).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/review", url))
        .json(&json!({"address": "123 Main St"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    let raw = resp.text().await.unwrap();
    let data: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let error = data["error"].as_str().expect("error field");
    assert!(error.contains("simulated quota rejection"), "got: {}", error);
    assert!(!raw.contains("\"review\""), "no review key on failure: {}", raw);

    assert_eq!(mock.calls(), 1);
    server_handle.abort();
}

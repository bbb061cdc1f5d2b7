use std::sync::Arc;

use appraise::MockCompletion;
use serde_json::json;

use super::common;

#[tokio::test]
async fn e2e_blank_address_is_400_without_upstream_call() {
    let mock = Arc::new(MockCompletion::with_reply("never used"));
    let (url, server_handle) = common::spawn_server(mock.clone()).await;
    let client = reqwest::Client::new();

    // Blank, whitespace-only, and absent address all take the validation path.
    for body in [
        json!({"address": ""}),
        json!({"address": "   "}),
        json!({"sqft": "1500"}),
    ] {
        let resp = client
            .post(format!("{}/review", url))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400, "body: {}", body);
        let data: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(data["error"], "Address is required.");
        assert!(data.get("review").is_none());
    }

    assert_eq!(mock.calls(), 0, "completion service must never be invoked");
    server_handle.abort();
}

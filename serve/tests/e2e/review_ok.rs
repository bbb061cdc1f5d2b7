use std::sync::Arc;

use appraise::MockCompletion;
use serde_json::json;

use super::common;

#[tokio::test]
async fn e2e_review_ok_returns_review_text() {
    let mock = Arc::new(MockCompletion::with_reply("  Solid B-class rental. Buy.  "));
    let (url, server_handle) = common::spawn_server(mock.clone()).await;

    let body = json!({
        "address": "456 Oak Ave",
        "sqft": "1500",
        "interestRate": "6.5",
        "comps": [
            {"address": "789 Pine Rd", "price": "450000", "sqft": "1800", "grade": "B", "yearSold": "2023"}
        ],
        "rentComps": ["2bd near school, $1900/mo"]
    });
    let resp = reqwest::Client::new()
        .post(format!("{}/review", url))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let data: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(data["review"], "Solid B-class rental. Buy.");
    assert!(data.get("error").is_none());

    // Exactly one upstream call; the prompt carries the address and comp data.
    assert_eq!(mock.calls(), 1);
    let prompt = mock.last_prompt().expect("prompt recorded");
    assert!(prompt.contains("456 Oak Ave"));
    assert!(prompt.contains("789 Pine Rd"));
    assert!(prompt.contains("450000"));
    assert!(prompt.contains("$1900/mo"));

    server_handle.abort();
}

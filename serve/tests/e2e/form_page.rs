use std::sync::Arc;

use appraise::MockCompletion;

use super::common;

#[tokio::test]
async fn e2e_get_root_serves_form_page() {
    let mock = Arc::new(MockCompletion::with_reply("unused"));
    let (url, server_handle) = common::spawn_server(mock.clone()).await;

    let resp = reqwest::get(&url).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("addressInput"), "form page should have the address input");
    assert!(body.contains("/review"), "form page should post to /review");

    // Serving the page never touches the completion service.
    assert_eq!(mock.calls(), 0);
    server_handle.abort();
}

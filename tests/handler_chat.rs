mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_bot_and_nbv_use_different_prompts() {
    let client = Arc::new(common::CannedChatClient::ok(&["Hello", "there"]));
    let state = common::create_test_state(common::TestParts {
        chat: Some(client.clone()),
        ..Default::default()
    });
    let server = common::test_server(state);

    let conversation = json!({ "messages": [{ "role": "user", "content": "Hi" }] });

    for path in ["/api/shorten/bot", "/api/shorten/nbv"] {
        let response = server.post(path).json(&conversation).await;

        response.assert_status_ok();
        response.assert_json(&json!(["Hello", "there"]));
    }

    let prompts = client.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 2);
    assert_ne!(prompts[0], prompts[1]);
    assert!(prompts[1].contains("NBV Group"));
}

#[tokio::test]
async fn test_chat_rejects_bad_conversation() {
    let client = Arc::new(common::CannedChatClient::ok(&["unused"]));
    let state = common::create_test_state(common::TestParts {
        chat: Some(client.clone()),
        ..Default::default()
    });
    let server = common::test_server(state);

    let response = server
        .post("/api/shorten/bot")
        .json(&json!({ "messages": [] }))
        .await;
    response.assert_status_bad_request();

    let response = server
        .post("/api/shorten/bot")
        .json(&json!({ "messages": [{ "role": "assistant", "content": "Hi" }] }))
        .await;
    response.assert_status_bad_request();

    assert!(client.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_upstream_failure() {
    let state = common::create_test_state(common::TestParts {
        chat: Some(Arc::new(common::CannedChatClient::failing(529))),
        ..Default::default()
    });
    let server = common::test_server(state);

    let response = server
        .post("/api/shorten/nbv")
        .json(&json!({ "messages": [{ "role": "user", "content": "Hi" }] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "upstream_error");
}

#[tokio::test]
async fn test_chat_not_configured() {
    let server = common::test_server(common::create_test_state(Default::default()));

    let response = server
        .post("/api/shorten/bot")
        .json(&json!({ "messages": [{ "role": "user", "content": "Hi" }] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
}

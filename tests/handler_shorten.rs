mod common;

use axum::http::StatusCode;
use qr_shortener::domain::repositories::ShortLinkRepository;
use qr_shortener::infrastructure::persistence::InMemoryShortLinkRepository;
use qr_shortener::utils::id_generator::{SHORT_ID_LENGTH, is_url_safe};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn test_shorten_success() {
    let server = common::test_server(common::create_test_state(Default::default()));

    let body = common::shorten(&server, "https://example.com/some/long/path?q=1").await;

    let short_id = common::short_id_of(&body);
    assert_eq!(short_id.len(), SHORT_ID_LENGTH);
    assert!(is_url_safe(&short_id));
    assert_eq!(
        body["shortUrl"],
        format!("{}/api/shorten/{}", common::APP_URL, short_id)
    );
    assert_eq!(body["originalUrl"], "https://example.com/some/long/path?q=1");
    assert_eq!(body["clicks"], 0);
    assert!(body["id"].as_str().unwrap().parse::<uuid::Uuid>().is_ok());
    assert!(
        body["qrCode"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,")
    );
}

#[tokio::test]
async fn test_shorten_same_url_twice_gives_distinct_links() {
    let server = common::test_server(common::create_test_state(Default::default()));

    let mut ids = HashSet::new();
    for _ in 0..10 {
        let body = common::shorten(&server, "https://example.com").await;
        assert!(ids.insert(common::short_id_of(&body)));
    }
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let server = common::test_server(common::create_test_state(Default::default()));

    let response = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let server = common::test_server(common::create_test_state(Default::default()));

    let response = server.post("/api/shorten").json(&json!({})).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_null_url() {
    let server = common::test_server(common::create_test_state(Default::default()));

    let response = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": null }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_rejects_control_characters() {
    let (state, repository) = common::state_with_memory_store();
    let server = common::test_server(state);

    for url in ["https://example.com/a\nb", "https://example.com/a\tb"] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "originalUrl": url }))
            .await;

        response.assert_status_bad_request();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "validation_error", "{url:?}");
    }

    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = common::test_server(common::create_test_state(Default::default()));

    for url in ["not a url", "ftp://example.com/file", "example.com"] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "originalUrl": url }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{url}");
    }
}

#[tokio::test]
async fn test_shorten_unreachable_url() {
    let repository = Arc::new(InMemoryShortLinkRepository::new());
    let state = common::create_test_state(common::TestParts {
        repository: Some(repository.clone()),
        reachability: Some(Arc::new(common::UnreachableChecker)),
        ..Default::default()
    });
    let server = common::test_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "https://does-not-answer.example" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "URL is not reachable");
    assert_eq!(repository.count().await.unwrap(), 0);
}

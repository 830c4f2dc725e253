mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use qr_shortener::domain::entities::{NewShortLink, ShortLink};
use qr_shortener::domain::repositories::ShortLinkRepository;
use qr_shortener::error::AppError;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Store that is never reachable.
struct DownRepository;

fn unavailable() -> AppError {
    AppError::upstream("Database unavailable", json!({}))
}

#[async_trait]
impl ShortLinkRepository for DownRepository {
    async fn create(&self, _: NewShortLink) -> Result<ShortLink, AppError> {
        Err(unavailable())
    }
    async fn find_by_short_id(&self, _: &str) -> Result<Option<ShortLink>, AppError> {
        Err(unavailable())
    }
    async fn increment_clicks(&self, _: Uuid) -> Result<bool, AppError> {
        Err(unavailable())
    }
    async fn find_many_by_ids(&self, _: &[Uuid]) -> Result<Vec<ShortLink>, AppError> {
        Err(unavailable())
    }
    async fn count(&self) -> Result<i64, AppError> {
        Err(unavailable())
    }
    async fn total_clicks(&self) -> Result<i64, AppError> {
        Err(unavailable())
    }
    async fn ping(&self) -> Result<(), AppError> {
        Err(unavailable())
    }
}

#[tokio::test]
async fn test_health_check() {
    let server = common::test_server(common::create_test_state(Default::default()));

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"]["status"], "ok");
    assert_eq!(body["checks"]["mailer"]["status"], "disabled");
    assert_eq!(body["checks"]["chat"]["status"], "disabled");
}

#[tokio::test]
async fn test_health_check_store_down() {
    let state = common::create_test_state(common::TestParts {
        repository: Some(Arc::new(DownRepository)),
        ..Default::default()
    });
    let server = common::test_server(state);

    let response = server.get("/api/health").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_shorten_with_store_down_is_upstream() {
    let state = common::create_test_state(common::TestParts {
        repository: Some(Arc::new(DownRepository)),
        ..Default::default()
    });
    let server = common::test_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "originalUrl": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "upstream_error");
}

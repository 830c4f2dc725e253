mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

fn form() -> serde_json::Value {
    json!({
        "name": "John Doe",
        "email": "john@example.com",
        "message": "I would like to know more about your services...",
        "companyName": "Acme <Corp>"
    })
}

#[tokio::test]
async fn test_contact_success() {
    let mailer = Arc::new(common::RecordingMailer::default());
    let state = common::create_test_state(common::TestParts {
        mailer: Some(mailer.clone()),
        recipient: Some("owner@example.com".to_string()),
        ..Default::default()
    });
    let server = common::test_server(state);

    let response = server.post("/api/email/contact").json(&form()).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "success": true, "message": "Email sent successfully" }));

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "owner@example.com");
    assert_eq!(sent[0].reply_to.as_deref(), Some("john@example.com"));
    assert_eq!(sent[0].subject, "New Contact Form Submission");
    assert!(sent[0].html_body.contains("Company Name"));
    assert!(!sent[0].html_body.contains("<Corp>"));
}

#[tokio::test]
async fn test_contact_validation() {
    let mailer = Arc::new(common::RecordingMailer::default());
    let state = common::create_test_state(common::TestParts {
        mailer: Some(mailer.clone()),
        recipient: Some("owner@example.com".to_string()),
        ..Default::default()
    });
    let server = common::test_server(state);

    let response = server
        .post("/api/email/contact")
        .json(&json!({ "name": "John", "email": "nope", "message": "Hi" }))
        .await;

    response.assert_status_bad_request();
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_contact_send_failure() {
    let state = common::create_test_state(common::TestParts {
        mailer: Some(Arc::new(common::FailingMailer)),
        recipient: Some("owner@example.com".to_string()),
        ..Default::default()
    });
    let server = common::test_server(state);

    let response = server.post("/api/email/contact").json(&form()).await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Failed to send email");
}

#[tokio::test]
async fn test_contact_not_configured() {
    let server = common::test_server(common::create_test_state(Default::default()));

    let response = server.post("/api/email/contact").json(&form()).await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Email relay is not configured");
}

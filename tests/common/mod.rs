#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use qr_shortener::api::routes::api_routes;
use qr_shortener::application::services::{ChatService, ContactService, ShortenService};
use qr_shortener::domain::entities::ChatMessage;
use qr_shortener::domain::repositories::ShortLinkRepository;
use qr_shortener::infrastructure::llm::{ChatClient, ChatError, DisabledChatClient};
use qr_shortener::infrastructure::mailer::{DisabledMailer, MailError, Mailer, OutgoingEmail};
use qr_shortener::infrastructure::persistence::InMemoryShortLinkRepository;
use qr_shortener::infrastructure::qr::PngQrEncoder;
use qr_shortener::infrastructure::reachability::{ReachabilityChecker, SkipReachabilityChecker};
use qr_shortener::state::AppState;
use qr_shortener::utils::id_generator::RandomShortIdGenerator;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const APP_URL: &str = "http://sho.rt";

/// Mailer that records every message instead of sending it.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutgoingEmail>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// Mailer whose relay always refuses the connection.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: OutgoingEmail) -> Result<(), MailError> {
        Err(MailError::Transport("connection refused".to_string()))
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// Chat client that answers with fixed blocks and records the system prompts it saw.
pub struct CannedChatClient {
    pub reply: Result<Vec<String>, u16>,
    pub prompts: Mutex<Vec<String>>,
}

impl CannedChatClient {
    pub fn ok(blocks: &[&str]) -> Self {
        Self {
            reply: Ok(blocks.iter().map(|b| b.to_string()).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ChatClient for CannedChatClient {
    async fn complete(
        &self,
        system_prompt: &str,
        _messages: &[ChatMessage],
    ) -> Result<Vec<String>, ChatError> {
        self.prompts.lock().unwrap().push(system_prompt.to_string());

        match &self.reply {
            Ok(blocks) => Ok(blocks.clone()),
            Err(status) => Err(ChatError::Status {
                status: *status,
                body: "upstream failure".to_string(),
            }),
        }
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// Reachability checker that rejects every URL.
pub struct UnreachableChecker;

#[async_trait]
impl ReachabilityChecker for UnreachableChecker {
    async fn is_reachable(&self, _url: &str) -> bool {
        false
    }
}

/// Collaborators for a test state; anything left as `None` uses a disabled
/// or in-memory default.
#[derive(Default)]
pub struct TestParts {
    pub repository: Option<Arc<dyn ShortLinkRepository>>,
    pub mailer: Option<Arc<dyn Mailer>>,
    pub recipient: Option<String>,
    pub chat: Option<Arc<dyn ChatClient>>,
    pub reachability: Option<Arc<dyn ReachabilityChecker>>,
}

pub fn create_test_state(parts: TestParts) -> AppState {
    let repository = parts
        .repository
        .unwrap_or_else(|| Arc::new(InMemoryShortLinkRepository::new()));

    let shorten_service = ShortenService::new(
        repository,
        Arc::new(PngQrEncoder::default()),
        Arc::new(RandomShortIdGenerator),
        APP_URL,
        Duration::from_secs(5),
    );

    let mailer = parts.mailer.unwrap_or_else(|| Arc::new(DisabledMailer::new()));
    let chat = parts.chat.unwrap_or_else(|| Arc::new(DisabledChatClient::new()));
    let reachability = parts
        .reachability
        .unwrap_or_else(|| Arc::new(SkipReachabilityChecker::new()));

    AppState::new(
        Arc::new(shorten_service),
        Arc::new(ContactService::new(mailer, parts.recipient)),
        Arc::new(ChatService::new(chat)),
        reachability,
    )
}

/// Test state over an in-memory store the caller keeps a handle to.
pub fn state_with_memory_store() -> (AppState, Arc<InMemoryShortLinkRepository>) {
    let repository = Arc::new(InMemoryShortLinkRepository::new());
    let state = create_test_state(TestParts {
        repository: Some(repository.clone()),
        ..Default::default()
    });
    (state, repository)
}

pub fn test_app(state: AppState) -> Router {
    Router::new().nest("/api", api_routes()).with_state(state)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(test_app(state)).unwrap()
}

/// Creates a link through the API and returns the response body.
pub async fn shorten(server: &TestServer, url: &str) -> serde_json::Value {
    let response = server
        .post("/api/shorten")
        .json(&serde_json::json!({ "originalUrl": url }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()
}

/// Last path segment of a `shortUrl`.
pub fn short_id_of(body: &serde_json::Value) -> String {
    body["shortUrl"]
        .as_str()
        .unwrap()
        .rsplit('/')
        .next()
        .unwrap()
        .to_string()
}

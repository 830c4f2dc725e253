//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{ChatService, ContactService, ShortenService};
use crate::infrastructure::reachability::ReachabilityChecker;

/// Handles built once at startup and cloned cheaply per request.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub contact_service: Arc<ContactService>,
    pub chat_service: Arc<ChatService>,
    pub reachability: Arc<dyn ReachabilityChecker>,
}

impl AppState {
    pub fn new(
        shorten_service: Arc<ShortenService>,
        contact_service: Arc<ContactService>,
        chat_service: Arc<ChatService>,
        reachability: Arc<dyn ReachabilityChecker>,
    ) -> Self {
        Self {
            shorten_service,
            contact_service,
            chat_service,
            reachability,
        }
    }
}

//! DTOs for the chat proxy endpoints.

use serde::Deserialize;

use crate::domain::entities::ChatMessage;

/// Conversation so far, oldest first. The reply is a plain JSON array of strings.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

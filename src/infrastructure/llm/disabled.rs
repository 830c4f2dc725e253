//! Chat client used when no API key is configured.

use async_trait::async_trait;
use tracing::debug;

use super::service::{ChatClient, ChatError};
use crate::domain::entities::ChatMessage;

/// Rejects every request with [`ChatError::NotConfigured`].
#[derive(Debug, Clone, Copy)]
pub struct DisabledChatClient;

impl DisabledChatClient {
    pub fn new() -> Self {
        debug!("Using DisabledChatClient (ANTHROPIC_API_KEY not set)");
        Self
    }
}

impl Default for DisabledChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for DisabledChatClient {
    async fn complete(
        &self,
        _system_prompt: &str,
        _messages: &[ChatMessage],
    ) -> Result<Vec<String>, ChatError> {
        Err(ChatError::NotConfigured)
    }

    fn is_configured(&self) -> bool {
        false
    }
}

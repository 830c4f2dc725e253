//! Chat completion client trait and error types.

use async_trait::async_trait;

use crate::domain::entities::ChatMessage;

/// Errors returned by a chat completion backend.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Chat client is not configured")]
    NotConfigured,

    #[error("Chat request failed: {0}")]
    Request(String),

    #[error("Chat API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected chat API response: {0}")]
    Decode(String),
}

/// A hosted language model that answers a conversation under a system prompt.
///
/// # Implementations
///
/// - [`crate::infrastructure::llm::AnthropicClient`] - Anthropic Messages API
/// - [`crate::infrastructure::llm::DisabledChatClient`] - rejects every request
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Returns the text blocks of the model's reply.
    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<Vec<String>, ChatError>;

    /// Whether a real backend is behind this client.
    fn is_configured(&self) -> bool;
}

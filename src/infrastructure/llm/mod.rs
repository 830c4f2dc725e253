//! Hosted language model client for the chat proxy endpoints.

mod anthropic;
mod disabled;
mod service;

pub use anthropic::AnthropicClient;
pub use disabled::DisabledChatClient;
pub use service::{ChatClient, ChatError};

#[cfg(test)]
pub use service::MockChatClient;

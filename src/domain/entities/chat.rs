//! Chat conversation types forwarded to the hosted language model.

use serde::{Deserialize, Serialize};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Assistant persona, each with its own fixed system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    /// General site assistant served at `/shorten/bot`.
    SiteAssistant,
    /// NBV Group sales assistant served at `/shorten/nbv`.
    NbvSales,
}

impl Persona {
    pub fn name(&self) -> &'static str {
        match self {
            Persona::SiteAssistant => "bot",
            Persona::NbvSales => "nbv",
        }
    }
}

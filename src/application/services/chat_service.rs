//! Chat proxy with one fixed system prompt per persona.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error};

use crate::domain::entities::{ChatMessage, ChatRole, Persona};
use crate::error::AppError;
use crate::infrastructure::llm::ChatClient;

const SITE_ASSISTANT_PROMPT: &str = "You are the assistant embedded on a personal \
website that also offers a URL shortener with QR codes. Answer questions about the \
site owner's work and about using the shortener. Keep answers short, friendly and \
factual. If you do not know something, say so and suggest using the contact form.";

const NBV_SALES_PROMPT: &str = "You are the AI sales assistant of NBV Group, a sales \
consulting and training firm with 30 years of experience working with startups and \
Fortune 500 companies. Help visitors understand NBV Group's offering: Basic Sales \
Training 101 for new salespeople, Advanced Sales Training for experienced \
professionals, customized workshops and sales consulting. Be concise and \
professional, never invent prices or commitments, and invite visitors to get in \
touch through the contact form for a tailored proposal.";

impl Persona {
    /// Fixed system prompt sent with every conversation for this persona.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Persona::SiteAssistant => SITE_ASSISTANT_PROMPT,
            Persona::NbvSales => NBV_SALES_PROMPT,
        }
    }
}

/// Forwards conversations to the language model under a persona.
pub struct ChatService {
    client: Arc<dyn ChatClient>,
}

impl ChatService {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    /// Returns the assistant's reply as text blocks.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `messages` is empty, has a blank message,
    ///   or does not end with a user message
    /// - [`AppError::Upstream`] if the proxy is not configured or the model
    ///   API call fails
    pub async fn reply(
        &self,
        persona: Persona,
        messages: &[ChatMessage],
    ) -> Result<Vec<String>, AppError> {
        validate_conversation(messages)?;

        if !self.client.is_configured() {
            return Err(AppError::upstream(
                "Chat assistant is not configured",
                json!({ "persona": persona.name() }),
            ));
        }

        debug!(persona = persona.name(), turns = messages.len(), "Forwarding conversation");

        self.client
            .complete(persona.system_prompt(), messages)
            .await
            .map_err(|e| {
                error!(persona = persona.name(), error = %e, "Chat completion failed");
                AppError::upstream(
                    "Failed to get a response from the assistant",
                    json!({ "persona": persona.name() }),
                )
            })
    }
}

fn validate_conversation(messages: &[ChatMessage]) -> Result<(), AppError> {
    let Some(last) = messages.last() else {
        return Err(AppError::bad_request(
            "messages must not be empty",
            json!({ "field": "messages" }),
        ));
    };

    if let Some(index) = messages.iter().position(|m| m.content.trim().is_empty()) {
        return Err(AppError::bad_request(
            "message content must not be empty",
            json!({ "field": "messages", "index": index }),
        ));
    }

    if last.role != ChatRole::User {
        return Err(AppError::bad_request(
            "The last message must come from the user",
            json!({ "field": "messages" }),
        ));
    }

    Ok(())
}

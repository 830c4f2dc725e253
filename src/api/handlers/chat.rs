//! Handlers for the chat proxy personas.

use axum::{Json, extract::State};

use crate::api::dto::chat::ChatRequest;
use crate::domain::entities::Persona;
use crate::error::AppError;
use crate::state::AppState;

/// Site assistant.
///
/// # Endpoint
///
/// `POST /api/shorten/bot`
///
/// # Request Body
///
/// ```json
/// { "messages": [{ "role": "user", "content": "What is this site about?" }] }
/// ```
///
/// # Response
///
/// ```json
/// ["This site belongs to..."]
/// ```
pub async fn bot_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<Vec<String>>, AppError> {
    reply(&state, Persona::SiteAssistant, payload).await
}

/// NBV Group sales assistant. Same contract as [`bot_handler`].
///
/// # Endpoint
///
/// `POST /api/shorten/nbv`
pub async fn nbv_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<Vec<String>>, AppError> {
    reply(&state, Persona::NbvSales, payload).await
}

async fn reply(
    state: &AppState,
    persona: Persona,
    payload: ChatRequest,
) -> Result<Json<Vec<String>>, AppError> {
    let blocks = state
        .chat_service
        .reply(persona, &payload.messages)
        .await?;

    Ok(Json(blocks))
}

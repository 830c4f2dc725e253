//! API route configuration.

use crate::api::handlers::{
    batch_lookup_handler, bot_handler, contact_handler, health_handler, nbv_handler,
    redirect_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`            - Create a short link with QR code
/// - `GET  /shorten/{shortId}`  - Redirect and count the click
/// - `POST /shorten/ids`        - Batch lookup by id, newest first
/// - `POST /shorten/bot`        - Site assistant chat proxy
/// - `POST /shorten/nbv`        - NBV Group sales assistant chat proxy
/// - `POST /email/contact`      - Contact form relay
/// - `GET  /health`             - Health check
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/shorten/ids", post(batch_lookup_handler))
        .route("/shorten/bot", post(bot_handler))
        .route("/shorten/nbv", post(nbv_handler))
        .route("/shorten/{short_id}", get(redirect_handler))
        .route("/email/contact", post(contact_handler))
        .route("/health", get(health_handler))
}

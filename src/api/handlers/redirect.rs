//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorten/{shortId}`
///
/// # Click Counting
///
/// The click is recorded before the response is sent, so a client that
/// follows the redirect and then looks the link up sees its own click.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.shorten_service.redirect(&short_id).await?;

    debug!(short_id = %short_id, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}

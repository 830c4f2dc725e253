//! Handlers for link shortening and batch lookup.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use tracing::info;
use validator::Validate;

use crate::api::dto::shorten::{BatchLookupRequest, ShortLinkResponse, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link with a QR code for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com/some/long/path?q=1" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortUrl": "http://localhost:3000/api/shorten/Xk3_9aQmT0bz",
///   "qrCode": "data:image/png;base64,iVBORw0KGgo...",
///   "originalUrl": "https://example.com/some/long/path?q=1",
///   "clicks": 0,
///   "id": "6f1c2c1e-7f1e-4c53-9d8e-3b0f0a7a1e2d"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing, malformed, or does not
/// answer the reachability probe.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortLinkResponse>), AppError> {
    payload.validate()?;

    let original_url = payload.url();

    if !state.reachability.is_reachable(original_url).await {
        return Err(AppError::bad_request(
            "URL is not reachable",
            json!({ "field": "originalUrl" }),
        ));
    }

    let link = state
        .shorten_service
        .shorten_url(original_url)
        .await?;
    let short_url = state.shorten_service.short_url(&link.short_id);

    info!(short_id = %link.short_id, id = %link.id, "Short link created");

    Ok((
        StatusCode::CREATED,
        Json(ShortLinkResponse::new(link, short_url)),
    ))
}

/// Looks up several short links by id.
///
/// # Endpoint
///
/// `POST /api/shorten/ids`
///
/// # Request Body
///
/// ```json
/// { "ids": ["6f1c2c1e-7f1e-4c53-9d8e-3b0f0a7a1e2d", "unknown"] }
/// ```
///
/// # Response
///
/// Array of links in the same shape as `POST /api/shorten`, newest first.
/// Unknown and malformed ids are left out.
pub async fn batch_lookup_handler(
    State(state): State<AppState>,
    Json(payload): Json<BatchLookupRequest>,
) -> Result<Json<Vec<ShortLinkResponse>>, AppError> {
    let ids = payload.parsed_ids();
    let links = state.shorten_service.find_many_by_ids(&ids).await?;

    let items = links
        .into_iter()
        .map(|link| {
            let short_url = state.shorten_service.short_url(&link.short_id);
            ShortLinkResponse::new(link, short_url)
        })
        .collect();

    Ok(Json(items))
}

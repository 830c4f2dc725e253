//! Handler for the contact form relay.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::contact::{ContactRequest, ContactResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Relays a contact form submission to the site owner by e-mail.
///
/// # Endpoint
///
/// `POST /api/email/contact`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john@example.com",
///   "subject": "Inquiry about services",
///   "message": "I would like to know more...",
///   "company": "Any extra field is included in the e-mail"
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "success": true, "message": "Email sent successfully" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on invalid input and 502 Bad Gateway if the relay
/// is not configured or delivery fails.
pub async fn contact_handler(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    payload.validate()?;

    state
        .contact_service
        .send_contact_form(payload.into_submission())
        .await?;

    Ok(Json(ContactResponse {
        success: true,
        message: "Email sent successfully".to_string(),
    }))
}

//! Contact form relay.

use std::sync::Arc;

use askama::Template;
use serde_json::json;
use tracing::{error, info};

use crate::domain::entities::ContactSubmission;
use crate::error::AppError;
use crate::infrastructure::mailer::{Mailer, OutgoingEmail};

/// Subject used when the submitter leaves it blank.
pub const DEFAULT_SUBJECT: &str = "New Contact Form Submission";

/// HTML body of a relayed submission. Values are escaped by the template.
#[derive(Template)]
#[template(path = "contact_email.html")]
struct ContactEmailTemplate<'a> {
    fields: Vec<(String, &'a str)>,
}

/// Renders the HTML table sent to the site owner.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the template fails to render.
pub fn render_contact_html(submission: &ContactSubmission) -> Result<String, AppError> {
    ContactEmailTemplate {
        fields: submission.labelled_fields(),
    }
    .render()
    .map_err(|e| AppError::internal("Failed to render e-mail", json!({ "reason": e.to_string() })))
}

/// Forwards contact form submissions to a fixed recipient.
pub struct ContactService {
    mailer: Arc<dyn Mailer>,
    recipient: Option<String>,
}

impl ContactService {
    /// Creates a contact service delivering to `recipient`.
    ///
    /// With no recipient the relay is considered unconfigured.
    pub fn new(mailer: Arc<dyn Mailer>, recipient: Option<String>) -> Self {
        Self { mailer, recipient }
    }

    /// Whether submissions can actually be delivered.
    pub fn is_configured(&self) -> bool {
        self.recipient.is_some() && self.mailer.is_configured()
    }

    /// Sends `submission` to the configured recipient with `Reply-To` set to
    /// the submitter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the relay is not configured or the
    /// message could not be sent. Transport details are logged, not returned.
    pub async fn send_contact_form(&self, submission: ContactSubmission) -> Result<(), AppError> {
        let recipient = match (&self.recipient, self.mailer.is_configured()) {
            (Some(recipient), true) => recipient.clone(),
            _ => {
                return Err(AppError::upstream(
                    "Email relay is not configured",
                    json!({}),
                ));
            }
        };

        let subject = submission
            .subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SUBJECT)
            .to_string();

        let email = OutgoingEmail {
            to: recipient,
            reply_to: Some(submission.email.clone()),
            subject,
            html_body: render_contact_html(&submission)?,
        };

        if let Err(e) = self.mailer.send(email).await {
            error!(error = %e, "Failed to send contact e-mail");
            return Err(AppError::upstream("Failed to send email", json!({})));
        }

        info!(reply_to = %submission.email, "Contact e-mail sent");
        Ok(())
    }
}

//! Mailer trait and error types.

use async_trait::async_trait;

/// Errors that can occur while sending e-mail.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Mailer is not configured")]
    NotConfigured,

    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("SMTP transport error: {0}")]
    Transport(String),
}

/// A fully rendered message ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: String,
}

/// Outbound e-mail delivery.
///
/// # Implementations
///
/// - [`crate::infrastructure::mailer::SmtpMailer`] - SMTP via `lettre`
/// - [`crate::infrastructure::mailer::DisabledMailer`] - rejects every send
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;

    /// Whether a real transport is behind this mailer.
    fn is_configured(&self) -> bool;
}

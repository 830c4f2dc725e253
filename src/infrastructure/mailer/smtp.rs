//! SMTP mailer built on `lettre`.

use async_trait::async_trait;
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::info;

use super::service::{MailError, Mailer, OutgoingEmail};
use crate::config::SmtpConfig;

/// Sends mail through a single SMTP relay.
///
/// The transport pools its connections internally, so one instance is built
/// at startup and shared by all requests.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Builds the transport from configuration.
    ///
    /// `secure = true` uses implicit TLS (usually port 465); otherwise the
    /// connection is upgraded with STARTTLS.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::InvalidAddress`] if `from` does not parse, or
    /// [`MailError::Transport`] if the relay host is rejected.
    pub fn new(config: &SmtpConfig, timeout: Duration) -> Result<Self, MailError> {
        let from = parse_mailbox(&config.from)?;

        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        }
        .map_err(|e| MailError::Transport(e.to_string()))?
        .port(config.port)
        .timeout(Some(timeout));

        let builder = match (&config.user, &config.password) {
            (Some(user), Some(password)) => {
                builder.credentials(Credentials::new(user.clone(), password.clone()))
            }
            _ => builder,
        };

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| MailError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}

/// Builds the `lettre` message for an [`OutgoingEmail`].
pub fn build_message(from: &Mailbox, email: OutgoingEmail) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(from.clone())
        .to(parse_mailbox(&email.to)?)
        .subject(email.subject)
        .header(ContentType::TEXT_HTML);

    if let Some(reply_to) = email.reply_to.as_deref() {
        builder = builder.reply_to(parse_mailbox(reply_to)?);
    }

    builder
        .body(email.html_body)
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        let message = build_message(&self.from, email)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        info!(code = %response.code(), "Email sent successfully");
        Ok(())
    }

    fn is_configured(&self) -> bool {
        true
    }
}

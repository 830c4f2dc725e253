//! Mailer used when SMTP is not configured.

use async_trait::async_trait;
use tracing::debug;

use super::service::{MailError, Mailer, OutgoingEmail};

/// Rejects every send with [`MailError::NotConfigured`].
#[derive(Debug, Clone, Copy)]
pub struct DisabledMailer;

impl DisabledMailer {
    pub fn new() -> Self {
        debug!("Using DisabledMailer (SMTP not configured)");
        Self
    }
}

impl Default for DisabledMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for DisabledMailer {
    async fn send(&self, _email: OutgoingEmail) -> Result<(), MailError> {
        Err(MailError::NotConfigured)
    }

    fn is_configured(&self) -> bool {
        false
    }
}

//! Outbound e-mail for the contact form relay.
//!
//! Provides a [`Mailer`] trait with two implementations:
//! - [`SmtpMailer`] - Production SMTP transport
//! - [`DisabledMailer`] - Used when SMTP settings are absent

mod disabled;
mod service;
mod smtp;

pub use disabled::DisabledMailer;
pub use service::{MailError, Mailer, OutgoingEmail};
pub use smtp::{SmtpMailer, build_message};

#[cfg(test)]
pub use service::MockMailer;

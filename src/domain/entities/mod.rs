//! Core domain entities.
//!
//! - [`ShortLink`] - A shortened URL with QR code and click counter
//! - [`ContactSubmission`] - A contact form relayed by e-mail
//! - [`ChatMessage`] - A conversation turn forwarded to the language model
//!
//! Creation input is kept separate from stored records (`NewShortLink` vs
//! `ShortLink`) so that store-assigned fields never come from callers.

pub mod chat;
pub mod contact;
pub mod short_link;

pub use chat::{ChatMessage, ChatRole, Persona};
pub use contact::ContactSubmission;
pub use short_link::{NewShortLink, ShortLink};

//! Application layer services implementing business logic.
//!
//! Services consume the repository and client traits and provide a clean API
//! for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Short link creation, redirects and batch lookup
//! - [`services::contact_service::ContactService`] - Contact form relay by e-mail
//! - [`services::chat_service::ChatService`] - Chat proxy to the language model

pub mod services;

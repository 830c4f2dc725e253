//! Infrastructure layer for external integrations.
//!
//! This layer implements the interfaces the application layer depends on.
//!
//! # Modules
//!
//! - [`persistence`] - Short link stores (PostgreSQL, in-memory)
//! - [`qr`] - QR code rendering
//! - [`reachability`] - Outbound URL reachability checks
//! - [`mailer`] - SMTP delivery for the contact relay
//! - [`llm`] - Hosted language model client for the chat proxy

pub mod llm;
pub mod mailer;
pub mod persistence;
pub mod qr;
pub mod reachability;

//! Business logic services for the application layer.

pub mod chat_service;
pub mod contact_service;
pub mod shorten_service;

pub use chat_service::ChatService;
pub use contact_service::ContactService;
pub use shorten_service::ShortenService;

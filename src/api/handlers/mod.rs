//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod chat;
pub mod contact;
pub mod health;
pub mod redirect;
pub mod shorten;

pub use chat::{bot_handler, nbv_handler};
pub use contact::contact_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::{batch_lookup_handler, shorten_handler};

//! QR code rendering for short links.
//!
//! Provides a [`QrEncoder`] trait with the [`PngQrEncoder`] implementation.

mod png;
mod service;

pub use png::{PngQrEncoder, render_png_data_uri};
pub use service::{QrEncoder, QrError, QrResult};

#[cfg(test)]
pub use service::MockQrEncoder;

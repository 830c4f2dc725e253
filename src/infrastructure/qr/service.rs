//! QR encoder trait and error types.

use async_trait::async_trait;

/// Errors that can occur while producing a QR code image.
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error("QR encoding failed: {0}")]
    Encode(String),

    #[error("QR image rendering failed: {0}")]
    Render(String),

    #[error("QR worker task failed: {0}")]
    Task(String),
}

/// Result type for QR operations.
pub type QrResult<T> = Result<T, QrError>;

/// Turns text into a self-contained image data URI.
///
/// # Implementations
///
/// - [`crate::infrastructure::qr::PngQrEncoder`] - PNG rendered with the `qrcode` crate
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QrEncoder: Send + Sync {
    /// Encodes `text` and returns a `data:` URI of the rendered image.
    async fn to_data_uri(&self, text: &str) -> QrResult<String>;
}

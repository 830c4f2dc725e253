//! PNG QR encoder.

use async_trait::async_trait;
use base64::Engine as _;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

use super::service::{QrEncoder, QrError, QrResult};

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Renders QR codes as PNG and wraps them in a base64 data URI.
///
/// Rendering is CPU-bound, so it runs on Tokio's blocking pool.
#[derive(Debug, Clone, Copy)]
pub struct PngQrEncoder {
    min_size: u32,
}

impl PngQrEncoder {
    /// Creates an encoder producing images at least `min_size` pixels wide.
    pub fn new(min_size: u32) -> Self {
        Self { min_size }
    }
}

impl Default for PngQrEncoder {
    fn default() -> Self {
        Self::new(200)
    }
}

/// Synchronous encode + render + base64 pipeline.
pub fn render_png_data_uri(text: &str, min_size: u32) -> QrResult<String> {
    let code = QrCode::new(text.as_bytes()).map_err(|e| QrError::Encode(e.to_string()))?;

    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(min_size, min_size)
        .build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| QrError::Render(e.to_string()))?;

    let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
    Ok(format!("{DATA_URI_PREFIX}{encoded}"))
}

#[async_trait]
impl QrEncoder for PngQrEncoder {
    async fn to_data_uri(&self, text: &str) -> QrResult<String> {
        let text = text.to_owned();
        let min_size = self.min_size;

        tokio::task::spawn_blocking(move || render_png_data_uri(&text, min_size))
            .await
            .map_err(|e| QrError::Task(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_render_produces_png_data_uri() {
        let uri = render_png_data_uri("http://localhost:3000/api/shorten/abc123", 100).unwrap();

        assert!(uri.starts_with(DATA_URI_PREFIX));

        let payload = &uri[DATA_URI_PREFIX.len()..];
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render_png_data_uri("https://s.example.com/x", 100).unwrap();
        let b = render_png_data_uri("https://s.example.com/x", 100).unwrap();
        let c = render_png_data_uri("https://s.example.com/y", 100).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[tokio::test]
    async fn test_encoder_runs_on_blocking_pool() {
        let encoder = PngQrEncoder::default();
        let uri = encoder.to_data_uri("https://example.com").await.unwrap();
        assert!(uri.starts_with(DATA_URI_PREFIX));
    }
}

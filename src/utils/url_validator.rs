//! Validation of target URLs before they are shortened.
//!
//! URLs are checked, not rewritten: the stored `original_url` is exactly what
//! the client submitted, so a redirect returns the same string.

use url::Url;

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL cannot be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL must not contain control characters")]
    ControlCharacter,
}

/// Checks that `input` is a non-empty absolute `http` or `https` URL with a host.
///
/// Control characters are rejected outright: the parser strips tabs and
/// newlines, but the stored input must stay usable as a `Location` header.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target_url("https://example.com").is_ok());
/// assert_eq!(validate_target_url(""), Err(UrlValidationError::Empty));
/// assert_eq!(
///     validate_target_url("javascript:alert(1)"),
///     Err(UrlValidationError::UnsupportedProtocol)
/// );
/// ```
pub fn validate_target_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.chars().any(char::is_control) {
        return Err(UrlValidationError::ControlCharacter);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}

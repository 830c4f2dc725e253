//! Short identifier generation.
//!
//! Identifiers are drawn from the OS CSPRNG and encoded as URL-safe base64
//! without padding, so they never depend on predictable input and can be
//! used directly as a URL path segment.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 9;

/// Length of a generated identifier in characters.
pub const SHORT_ID_LENGTH: usize = 12;

/// Source of candidate short identifiers.
///
/// Uniqueness is not the generator's concern: the store rejects duplicates
/// and the caller retries with a fresh candidate.
pub trait ShortIdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Production generator backed by [`generate_short_id`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomShortIdGenerator;

impl ShortIdGenerator for RandomShortIdGenerator {
    fn generate(&self) -> String {
        generate_short_id()
    }
}

/// Generates a cryptographically secure random short identifier.
///
/// 9 random bytes (72 bits) encoded as URL-safe base64 without padding,
/// producing a 12-character identifier over `A-Z a-z 0-9 - _`.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_short_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Returns true if `candidate` only contains characters a generated
/// identifier can contain.
pub fn is_url_safe(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

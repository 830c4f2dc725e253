//! ShortLink entity: a shortened URL with its QR code and click counter.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A persisted short link.
///
/// Every field except `clicks` is fixed at creation. `clicks` only ever
/// grows, one step per successful redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: Uuid,
    pub original_url: String,
    pub short_id: String,
    pub qr_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: Uuid,
        original_url: String,
        short_id: String,
        qr_code: String,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_id,
            qr_code,
            clicks,
            created_at,
        }
    }
}

/// Input data for creating a new short link.
///
/// The store assigns `id` and `created_at` and starts `clicks` at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub original_url: String,
    pub short_id: String,
    pub qr_code: String,
}

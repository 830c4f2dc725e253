//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Durable mapping from short identifier to [`ShortLink`] record.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryShortLinkRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See the unit tests in `memory_short_link_repository.rs` and the PostgreSQL
/// integration tests in `tests/repository_short_link.rs`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Creates a record with `clicks = 0` and `created_at = now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `short_id` already exists.
    /// Returns [`AppError::Validation`] if `original_url` is empty.
    /// Returns [`AppError::Internal`] or [`AppError::Upstream`] on store errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a record by its public short identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortLink>, AppError>;

    /// Atomically increments `clicks` by one for the record with primary key `id`.
    ///
    /// The increment happens inside the store, never as read-modify-write in
    /// the caller. Returns `Ok(false)` if no record has this id.
    async fn increment_clicks(&self, id: Uuid) -> Result<bool, AppError>;

    /// Returns every record whose primary key is in `ids`, newest first.
    ///
    /// Records created in the same instant are ordered by insertion, latest
    /// first. Unknown ids are silently omitted.
    async fn find_many_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ShortLink>, AppError>;

    /// Total number of stored links.
    async fn count(&self) -> Result<i64, AppError>;

    /// Sum of `clicks` across all links.
    async fn total_clicks(&self) -> Result<i64, AppError>;

    /// Cheap connectivity check used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}

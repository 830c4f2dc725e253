//! PostgreSQL implementation of the short link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

/// Row shape shared by every `SELECT` / `RETURNING` on `short_links`.
#[derive(Debug, FromRow)]
struct ShortLinkRow {
    id: Uuid,
    original_url: String,
    short_id: String,
    qr_code: String,
    clicks: i64,
    created_at: DateTime<Utc>,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(r: ShortLinkRow) -> Self {
        ShortLink::new(
            r.id,
            r.original_url,
            r.short_id,
            r.qr_code,
            r.clicks,
            r.created_at,
        )
    }
}

/// PostgreSQL repository for short links.
///
/// Uniqueness of `short_id` is enforced by the `short_links_short_id_key`
/// constraint; a violation surfaces as [`AppError::Conflict`].
pub struct PgShortLinkRepository {
    pool: Arc<PgPool>,
}

impl PgShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortLinkRepository for PgShortLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        if new_link.original_url.is_empty() {
            return Err(AppError::bad_request(
                "URL cannot be empty",
                json!({ "field": "originalUrl" }),
            ));
        }

        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            INSERT INTO short_links (original_url, short_id, qr_code)
            VALUES ($1, $2, $3)
            RETURNING id, original_url, short_id, qr_code, clicks, created_at
            "#,
        )
        .bind(&new_link.original_url)
        .bind(&new_link.short_id)
        .bind(&new_link.qr_code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, original_url, short_id, qr_code, clicks, created_at
            FROM short_links
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_clicks(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE short_links SET clicks = clicks + 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_many_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ShortLink>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, original_url, short_id, qr_code, clicks, created_at
            FROM short_links
            WHERE id = ANY($1)
            ORDER BY created_at DESC, seq DESC
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn total_clicks(&self) -> Result<i64, AppError> {
        let total: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(clicks), 0)::BIGINT FROM short_links")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(total)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}

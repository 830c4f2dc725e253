//! In-memory implementation of the short link repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

#[derive(Debug, Clone)]
struct Entry {
    link: ShortLink,
    /// Insertion order; breaks `created_at` ties.
    seq: u64,
}

#[derive(Debug, Default)]
struct Inner {
    by_id: HashMap<Uuid, Entry>,
    by_short_id: HashMap<String, Uuid>,
    next_seq: u64,
}

/// Process-local store with the same contract as the PostgreSQL repository.
///
/// All state sits behind one lock, so the uniqueness check and the insert in
/// [`create`](ShortLinkRepository::create) happen together, and click
/// increments are applied in place under the write lock.
#[derive(Debug, Default)]
pub struct InMemoryShortLinkRepository {
    inner: RwLock<Inner>,
}

impl InMemoryShortLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortLinkRepository for InMemoryShortLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        if new_link.original_url.is_empty() {
            return Err(AppError::bad_request(
                "URL cannot be empty",
                json!({ "field": "originalUrl" }),
            ));
        }

        let mut inner = self.inner.write().await;

        if inner.by_short_id.contains_key(&new_link.short_id) {
            return Err(AppError::conflict(
                "Short identifier already exists",
                json!({ "short_id": new_link.short_id }),
            ));
        }

        let link = ShortLink::new(
            Uuid::new_v4(),
            new_link.original_url,
            new_link.short_id,
            new_link.qr_code,
            0,
            Utc::now(),
        );

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.by_short_id.insert(link.short_id.clone(), link.id);
        inner.by_id.insert(
            link.id,
            Entry {
                link: link.clone(),
                seq,
            },
        );

        Ok(link)
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortLink>, AppError> {
        let inner = self.inner.read().await;

        Ok(inner
            .by_short_id
            .get(short_id)
            .and_then(|id| inner.by_id.get(id))
            .map(|entry| entry.link.clone()))
    }

    async fn increment_clicks(&self, id: Uuid) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;

        match inner.by_id.get_mut(&id) {
            Some(entry) => {
                entry.link.clicks += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_many_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ShortLink>, AppError> {
        let wanted: HashSet<&Uuid> = ids.iter().collect();
        let inner = self.inner.read().await;

        let mut entries: Vec<&Entry> = wanted
            .into_iter()
            .filter_map(|id| inner.by_id.get(id))
            .collect();
        entries.sort_by(|a, b| {
            b.link
                .created_at
                .cmp(&a.link.created_at)
                .then(b.seq.cmp(&a.seq))
        });

        Ok(entries.into_iter().map(|e| e.link.clone()).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.by_id.len() as i64)
    }

    async fn total_clicks(&self) -> Result<i64, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.by_id.values().map(|e| e.link.clicks).sum())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

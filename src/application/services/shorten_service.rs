//! Short link creation, redirect resolution and batch lookup.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::infrastructure::qr::QrEncoder;
use crate::utils::id_generator::ShortIdGenerator;
use crate::utils::url_validator::validate_target_url;

/// Number of fresh identifiers tried before a creation gives up on conflicts.
pub const MAX_ALLOCATION_ATTEMPTS: usize = 5;

/// Service for creating short links and resolving them back to their targets.
///
/// Every store and encoder call is bounded by `timeout`; a timeout surfaces as
/// [`AppError::Upstream`] and is not retried.
pub struct ShortenService {
    repository: Arc<dyn ShortLinkRepository>,
    qr_encoder: Arc<dyn QrEncoder>,
    id_generator: Arc<dyn ShortIdGenerator>,
    app_url: String,
    timeout: Duration,
}

impl ShortenService {
    /// Creates a new shorten service.
    ///
    /// `app_url` is the public base of the service, without trailing slash.
    pub fn new(
        repository: Arc<dyn ShortLinkRepository>,
        qr_encoder: Arc<dyn QrEncoder>,
        id_generator: Arc<dyn ShortIdGenerator>,
        app_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            repository,
            qr_encoder,
            id_generator,
            app_url: app_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Shortens `original_url` and stores it with a QR code of the short URL.
    ///
    /// The URL is stored exactly as given once it passes validation.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the URL is empty or not an absolute http(s) URL
    /// - [`AppError::Conflict`] if every allocation attempt hit an existing identifier
    /// - [`AppError::Upstream`] if the store or encoder timed out or is unavailable
    /// - [`AppError::CreationFailed`] for any other downstream failure
    pub async fn shorten_url(&self, original_url: &str) -> Result<ShortLink, AppError> {
        validate_target_url(original_url).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "field": "originalUrl" }))
        })?;

        for attempt in 1..=MAX_ALLOCATION_ATTEMPTS {
            let short_id = self.id_generator.generate();
            let short_url = self.short_url(&short_id);

            let qr_code = self
                .bounded("qr_encode", async {
                    self.qr_encoder.to_data_uri(&short_url).await.map_err(|e| {
                        error!(error = %e, short_id = %short_id, "QR encoding failed");
                        creation_failed()
                    })
                })
                .await?;

            let new_link = NewShortLink {
                original_url: original_url.to_string(),
                short_id: short_id.clone(),
                qr_code,
            };

            match self
                .bounded("create", self.repository.create(new_link))
                .await
            {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    warn!(attempt, short_id = %short_id, "Short identifier collision, retrying");
                }
                Err(e @ (AppError::Validation { .. } | AppError::Upstream { .. })) => {
                    return Err(e);
                }
                Err(e) => {
                    error!(error = %e, details = %e.to_error_info().details, "Failed to store short link");
                    return Err(creation_failed());
                }
            }
        }

        Err(AppError::conflict(
            "Could not allocate a unique short identifier",
            json!({ "attempts": MAX_ALLOCATION_ATTEMPTS }),
        ))
    }

    /// Resolves `short_id` to its original URL and records one click.
    ///
    /// The click is counted before returning. A failed increment is logged
    /// and does not prevent the redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this identifier; nothing
    /// is mutated in that case.
    pub async fn redirect(&self, short_id: &str) -> Result<String, AppError> {
        let link = self
            .bounded("find_by_short_id", self.repository.find_by_short_id(short_id))
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "shortId": short_id }))
            })?;

        match self
            .bounded("increment_clicks", self.repository.increment_clicks(link.id))
            .await
        {
            Ok(true) => {}
            Ok(false) => warn!(id = %link.id, "Click increment matched no row"),
            Err(e) => warn!(id = %link.id, error = %e, "Failed to increment clicks"),
        }

        Ok(link.original_url)
    }

    /// Returns the links among `ids` that exist, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on timeout, or the store's error.
    pub async fn find_many_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ShortLink>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.bounded("find_many_by_ids", self.repository.find_many_by_ids(ids))
            .await
    }

    /// Checks that the store answers within the operation timeout.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on timeout, or the store's error.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.bounded("ping", self.repository.ping()).await
    }

    /// Public short URL for an identifier.
    pub fn short_url(&self, short_id: &str) -> String {
        format!("{}/api/shorten/{}", self.app_url, short_id)
    }

    async fn bounded<T, F>(&self, operation: &'static str, future: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        match tokio::time::timeout(self.timeout, future).await {
            Ok(result) => result,
            Err(_) => {
                warn!(operation, timeout_ms = self.timeout.as_millis() as u64, "Operation timed out");
                Err(AppError::upstream(
                    "Storage operation timed out",
                    json!({ "operation": operation }),
                ))
            }
        }
    }
}

fn creation_failed() -> AppError {
    AppError::creation_failed("Failed to create short URL", json!({}))
}

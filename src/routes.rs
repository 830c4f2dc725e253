//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/*` - REST API (public, see [`crate::api::routes::api_routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured origins only, off when none are set
//! - **Body limit** - Rejects oversized request bodies
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// HTTP-level settings applied around the routes.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub body_limit_bytes: usize,
    pub cors_allowed_origins: Vec<String>,
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, options: &RouterOptions) -> NormalizePath<Router> {
    let mut router = Router::new()
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(options.body_limit_bytes));

    if let Some(cors) = cors::layer(&options.cors_allowed_origins) {
        router = router.layer(cors);
    }

    let router = router.layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

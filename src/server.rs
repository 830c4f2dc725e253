//! HTTP server initialization and runtime setup.
//!
//! Builds the store, outbound clients and services once, then runs the Axum
//! server until SIGINT or SIGTERM.

use crate::application::services::{ChatService, ContactService, ShortenService};
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::ShortLinkRepository;
use crate::infrastructure::llm::{AnthropicClient, ChatClient, DisabledChatClient};
use crate::infrastructure::mailer::{DisabledMailer, Mailer, SmtpMailer};
use crate::infrastructure::persistence::{InMemoryShortLinkRepository, PgShortLinkRepository};
use crate::infrastructure::qr::PngQrEncoder;
use crate::infrastructure::reachability::{
    HttpReachabilityChecker, ReachabilityChecker, SkipReachabilityChecker,
};
use crate::routes::{RouterOptions, app_router};
use crate::state::AppState;
use crate::utils::id_generator::RandomShortIdGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};

const SMTP_TIMEOUT: Duration = Duration::from_secs(30);
const CHAT_TIMEOUT: Duration = Duration::from_secs(60);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Short link store (PostgreSQL pool with migrations, or in-memory)
/// - QR encoder, reachability checker, mailer and chat client
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - An outbound client cannot be built from configuration
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_store(&config).await?;
    let state = build_state(&config, repository)?;

    let app = app_router(
        state,
        &RouterOptions {
            body_limit_bytes: config.body_limit_bytes,
            cors_allowed_origins: config.cors_allowed_origins.clone(),
        },
    );

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}/api");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Creates a PostgreSQL pool from the configured pool settings.
///
/// # Errors
///
/// Returns an error if the database cannot be reached.
pub async fn connect_pool(config: &Config, database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

async fn connect_store(config: &Config) -> Result<Arc<dyn ShortLinkRepository>> {
    match config.storage_backend {
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres backend")?;

            let pool = connect_pool(config, database_url).await?;
            info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            info!("Migrations applied");

            Ok(Arc::new(PgShortLinkRepository::new(Arc::new(pool))))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; links are lost on restart");
            Ok(Arc::new(InMemoryShortLinkRepository::new()))
        }
    }
}

/// Wires services and outbound clients around a store.
///
/// # Errors
///
/// Returns an error if the SMTP, chat or reachability client cannot be built.
pub fn build_state(
    config: &Config,
    repository: Arc<dyn ShortLinkRepository>,
) -> Result<AppState> {
    let shorten_service = ShortenService::new(
        repository,
        Arc::new(PngQrEncoder::default()),
        Arc::new(RandomShortIdGenerator),
        config.app_url.clone(),
        Duration::from_secs(config.store_timeout_secs),
    );

    let mailer: Arc<dyn Mailer> = match &config.smtp {
        Some(smtp) => {
            info!(host = %smtp.host, port = smtp.port, "Contact relay enabled");
            Arc::new(SmtpMailer::new(smtp, SMTP_TIMEOUT).context("Invalid SMTP configuration")?)
        }
        None => Arc::new(DisabledMailer::new()),
    };
    let recipient = config.smtp.as_ref().map(|smtp| smtp.to.clone());

    let chat_client: Arc<dyn ChatClient> = match &config.chat {
        Some(chat) => {
            info!(model = %chat.model, "Chat proxy enabled");
            Arc::new(AnthropicClient::new(chat, CHAT_TIMEOUT).context("Failed to build chat client")?)
        }
        None => Arc::new(DisabledChatClient::new()),
    };

    let reachability: Arc<dyn ReachabilityChecker> = if config.reachability_check {
        Arc::new(
            HttpReachabilityChecker::new(Duration::from_secs(config.reachability_timeout_secs))
                .context("Failed to build reachability checker")?,
        )
    } else {
        Arc::new(SkipReachabilityChecker::new())
    };

    Ok(AppState::new(
        Arc::new(shorten_service),
        Arc::new(ContactService::new(mailer, recipient)),
        Arc::new(ChatService::new(chat_client)),
        reachability,
    ))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

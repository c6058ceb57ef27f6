//! # hotelhubd: hotelhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`hotelhub.toml` plus env vars)
//! - Initialise `tracing` output
//! - Open the `SQLite` pool and run migrations
//! - Construct repositories, the audit sink and the token authenticator
//! - Construct application services, injecting them via port traits
//! - Build the axum router and serve it until Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer, no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use hotelhub_adapter_http_axum::auth::JwtAuthenticator;
use hotelhub_adapter_http_axum::state::AppState;
use hotelhub_adapter_storage_sqlite_sqlx::{SqliteLogRepository, SqliteRoomRepository};
use hotelhub_app::audit::TracingAuditSink;
use hotelhub_app::services::log_service::LogService;
use hotelhub_app::services::room_service::RoomService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = config
        .storage()
        .build()
        .await
        .context("initialising database")?;
    let pool = db.pool().clone();

    // Repositories
    let room_repo = SqliteRoomRepository::new(pool.clone());
    let log_repo = SqliteLogRepository::new(pool);

    // Audit
    let audit = Arc::new(TracingAuditSink::new());

    // Services
    let room_service = RoomService::new(room_repo, Arc::clone(&audit));
    let log_service = LogService::new(log_repo, audit);
    let authenticator = JwtAuthenticator::new(&config.jwt());

    // HTTP
    let state = AppState::new(room_service, log_service, authenticator);
    let app = hotelhub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(address = %bind_addr, "hotelhubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("hotelhubd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}

//! Main entry point for the bookmarks backend.
//!
//! This file initializes logging, loads configuration, sets up the database
//! connection pool, and serves the Axum router until a shutdown signal.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod repositories;
mod services;
mod utils;

use anyhow::Result;
use config::Config;
use database::Database;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utils::{jwt::JwtUtils, password};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = Config::from_env()?;
    let db = Database::new(&config).await?;
    db.migrate().await?;

    tokio::task::spawn_blocking(password::init_dummy_hash).await?;

    let jwt_utils = Arc::new(JwtUtils::new(&config.jwt_secret));
    let app = api::router(db.pool().clone(), jwt_utils);

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Starting bookmarks server on port {}", config.server_port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    Ok(())
}

/// Logs to stdout; `RUST_LOG` overrides the default filter.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,sqlx=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

//! Module for database connection setup and common utilities.
//!
//! This module is responsible for initializing the database connection pool,
//! applying the embedded schema migrations and providing a central point for
//! database-related helpers.

use crate::config::Config;
use anyhow::{Context, Result};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

pub mod models;

#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    /// Initializes the database connection pool.
    pub async fn new(config: &Config) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .context("DATABASE_URL is not a valid SQLite URL")?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect_with(options)
            .await?;

        Ok(Database { pool })
    }

    /// Applies the migrations embedded from `backend/migrations`.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("failed to run database migrations")?;
        info!("Database migrations applied");
        Ok(())
    }

    /// Returns a reference to the database connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

/// Returns `true` when the error was raised by a UNIQUE constraint.
pub fn is_unique_violation(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .is_some_and(|e| e.is_unique_violation())
}

#[cfg(test)]
pub mod test_support {
    use super::*;

    pub const TEST_SECRET: &str = "test-signing-secret";

    pub fn test_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            // Every connection to `sqlite::memory:` opens a fresh database.
            max_connections: 1,
            acquire_timeout_seconds: 3,
            jwt_secret: TEST_SECRET.to_string(),
            server_port: 0,
        }
    }

    /// In-memory database with the schema applied.
    pub async fn memory_database() -> Database {
        let db = Database::new(&test_config()).await.unwrap();
        db.migrate().await.unwrap();
        db
    }
}

/**
 * Server Configuration
 *
 * This module handles loading server configuration from the environment and
 * setting up the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with sensible defaults
 * for local development. Missing values that matter in production (the token
 * secret in particular) are logged as warnings.
 */

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Embedded SQL migrations, run on every startup.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Default token validity window in seconds.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 600;

/// Server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database URL
    pub database_url: String,
    /// Secret key used to sign auth tokens
    pub token_secret: String,
    /// Auth token validity window in seconds
    pub token_ttl_secs: i64,
    /// TCP port the server listens on
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables:
    ///
    /// - `DATABASE_URL` (default `sqlite://ideabank.sqlite?mode=rwc`)
    /// - `TOKEN_SECRET` (insecure development default, logged as a warning)
    /// - `TOKEN_TTL_SECS` (default 600)
    /// - `SERVER_PORT` (default 3000)
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://ideabank.sqlite?mode=rwc".to_string());

        let token_secret = std::env::var("TOKEN_SECRET").unwrap_or_else(|_| {
            tracing::warn!("TOKEN_SECRET not set, using insecure development default");
            "change-me-in-production".to_string()
        });

        let token_ttl_secs = std::env::var("TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);

        Self {
            database_url,
            token_secret,
            token_ttl_secs,
            port,
        }
    }
}

/// Create the SQLite connection pool and run migrations.
///
/// The database file is created if it does not exist, and foreign key
/// enforcement is enabled on every connection so that the idea → user
/// ownership constraint holds at the storage level.
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` if the pool cannot be created or a
/// migration fails. Unlike optional integrations, the store is required:
/// startup is aborted rather than continuing in a degraded mode.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    MIGRATOR.run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}

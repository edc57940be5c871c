/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum HTTP server: database
 * setup, state creation, and route configuration.
 */

use axum::Router;

use crate::auth::tokens::TokenService;
use crate::routes::router::create_router;
use crate::server::config::{connect_database, Config};
use crate::server::state::AppState;

/// Create and configure the Axum application.
///
/// Initialization steps:
///
/// 1. Connect to the database and run migrations
/// 2. Construct the token service from the configured secret and TTL
/// 3. Assemble the router with the shared state
///
/// # Errors
///
/// Returns an error if the database pool cannot be created or migrations
/// fail. The server does not start without its store.
pub async fn create_app(config: &Config) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing IdeaBank server");

    let pool = connect_database(&config.database_url).await?;

    let tokens = TokenService::new(&config.token_secret, config.token_ttl_secs);

    let state = AppState::new(pool, tokens);

    Ok(create_router(state))
}

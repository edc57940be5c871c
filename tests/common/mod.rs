//! Shared test helpers
//!
//! Provides an in-memory database, a TestServer factory, and user fixtures
//! for the API integration suites.

pub mod auth_helpers;
pub mod database;

use axum_test::TestServer;
use sqlx::SqlitePool;

use ideabank::auth::tokens::TokenService;
use ideabank::routes::router::create_router;
use ideabank::server::state::AppState;

/// Token validity window used by test servers.
pub const TEST_TOKEN_TTL_SECS: i64 = 600;

/// Spin up a TestServer over a fresh in-memory database.
///
/// The pool is returned alongside the server so fixtures can write rows
/// directly.
pub async fn test_server() -> (TestServer, SqlitePool) {
    test_server_with_token_ttl(TEST_TOKEN_TTL_SECS).await
}

/// Like [`test_server`] but with an explicit token TTL, for expiry tests.
pub async fn test_server_with_token_ttl(ttl_secs: i64) -> (TestServer, SqlitePool) {
    let pool = database::test_pool().await;
    let state = AppState::new(pool.clone(), TokenService::new("test-secret", ttl_secs));
    let server = TestServer::new(create_router(state)).unwrap();
    (server, pool)
}

/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container, built once at
 * startup and handed to the router. It holds the two services every request
 * may need:
 *
 * - the SQLite connection pool (credential and idea store)
 * - the token service (issues and verifies signed auth tokens)
 *
 * There are no globals: handlers and extractors receive these services
 * through Axum's `State` mechanism.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::tokens::TokenService;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool backing users and ideas
    pub db: SqlitePool,
    /// Signed auth token issuance and verification
    pub tokens: TokenService,
}

impl AppState {
    /// Build the state from its two services.
    pub fn new(db: SqlitePool, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}

/// Allow handlers to extract the pool directly via `State<SqlitePool>`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

/// Allow handlers to extract the token service directly via
/// `State<TokenService>`.
impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

/**
 * Router Configuration
 *
 * This module provides the router creation function that maps every API
 * endpoint to its handler.
 *
 * # Routes
 *
 * ## Users
 * - `POST /api/users` - Register a new user (public)
 * - `GET /api/users/{user_id}` - Look up a user (public)
 *
 * ## Tokens
 * - `GET /api/token` - Mint an auth token (Basic auth)
 *
 * ## Ideas (all Basic auth)
 * - `GET /api/ideas/` - List the current user's ideas
 * - `POST /api/ideas/` - Create an idea
 * - `GET /api/ideas/{idea_id}` - Get an idea
 * - `PUT /api/ideas/{idea_id}` - Update an idea
 * - `DELETE /api/ideas/{idea_id}` - Delete an idea
 *
 * ## Misc
 * - `GET /health` - Liveness probe (public)
 */

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::auth::handlers::{get_user, issue_token, register};
use crate::ideas::handlers::{create_idea, delete_idea, get_idea, list_ideas, update_idea};
use crate::server::state::AppState;

/// Liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Create the Axum router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/users", post(register))
        .route("/api/users/{user_id}", get(get_user))
        .route("/api/token", get(issue_token))
        .route("/api/ideas/", get(list_ideas).post(create_idea))
        .route(
            "/api/ideas/{idea_id}",
            get(get_idea).put(update_idea).delete(delete_idea),
        )
        .layer(TraceLayer::new_for_http())
        .fallback(|| async { StatusCode::NOT_FOUND })
        .with_state(state)
}

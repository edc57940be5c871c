/**
 * Token Issuance Handler
 *
 * This module implements the token endpoint for GET /api/token.
 *
 * # Token Flow
 *
 * The client authenticates with username/password (or a still-valid token)
 * and receives a fresh signed token. The token is then usable as the Basic
 * principal on subsequent requests, with any value in the password slot.
 */

use axum::extract::State;
use axum::Json;

use crate::auth::gate::CurrentUser;
use crate::auth::handlers::types::TokenResponse;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Issue an auth token for the authenticated user.
///
/// # Errors
///
/// * `401 Unauthorized` - bad or missing credentials
/// * `500 Internal Server Error` - token encoding failure
pub async fn issue_token(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state.tokens.issue(user.id)?;

    tracing::debug!("issued token for user {}", user.id);

    Ok(Json(TokenResponse { token }))
}

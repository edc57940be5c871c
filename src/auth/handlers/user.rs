/**
 * User Lookup Handler
 *
 * This module implements the public user lookup handler for
 * GET /api/users/{id}. No authentication is required.
 */

use axum::extract::{Path, State};
use axum::Json;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Get a user by id.
///
/// An unknown id responds 400, not 404.
///
/// # Errors
///
/// * `400 Bad Request` - no user with this id
/// * `500 Internal Server Error` - database failure
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = get_user_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::validation(format!("no user with id {}", user_id)))?;

    Ok(Json(UserResponse::from(user)))
}

/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /api/users.
 *
 * # Registration Process
 *
 * 1. Validate that username and password are present and non-empty
 * 2. Check that the username is not already taken
 * 3. Hash the password with bcrypt
 * 4. Create the user row
 * 5. Return the public user representation
 */

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::auth::users::{create_user, get_user_by_username, hash_password};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Register a new user.
///
/// # Errors
///
/// * `400 Bad Request` - malformed body, or empty username/password
/// * `409 Conflict` - username already taken
/// * `500 Internal Server Error` - hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /api/users HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "password": "secret"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"id": 1, "username": "alice"}
/// ```
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(request) = payload?;

    if request.username.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("username and password are required"));
    }

    if get_user_by_username(&state.db, &request.username)
        .await?
        .is_some()
    {
        tracing::warn!("username already exists: {}", request.username);
        return Err(ApiError::conflict("username already taken"));
    }

    let password_hash = hash_password(&request.password)?;

    let user = create_user(&state.db, &request.username, &password_hash).await?;

    tracing::info!("user registered: {} (id {})", user.username, user.id);

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

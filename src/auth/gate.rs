/**
 * Request Authentication Gate
 *
 * This module resolves a request's HTTP Basic credentials to a user
 * identity. It implements the `CurrentUser` extractor, which protected
 * handlers take as an argument.
 *
 * # Resolution Order
 *
 * The Basic principal doubles as either a token or a username:
 *
 * 1. Treat the principal as a signed token. If it verifies and the encoded
 *    user still exists, the request is authenticated as that user and the
 *    secret part is ignored.
 * 2. Otherwise treat the principal as a username and verify the secret as
 *    its password.
 *
 * If both paths fail the request is rejected with 401. Expired tokens, bad
 * signatures, unknown usernames, and wrong passwords are deliberately
 * indistinguishable to the client; the difference shows up only in logs.
 */

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::auth::users::{self, User};
use crate::error::ApiError;
use crate::server::state::AppState;

/// The authenticated user for the current request.
///
/// Extracting `CurrentUser` in a handler makes the endpoint require
/// authentication; the extractor rejects with 401 before the handler body
/// runs.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Parse an `Authorization: Basic <base64>` header value into its
/// principal and secret parts.
fn parse_basic(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let credentials = String::from_utf8(decoded).ok()?;
    let (principal, secret) = credentials.split_once(':')?;
    Some((principal.to_string(), secret.to_string()))
}

impl<S> FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        let (principal, secret) = parse_basic(header).ok_or(ApiError::Unauthorized)?;

        // Path 1: the principal is a token
        match state.tokens.verify(&principal) {
            Ok(user_id) => {
                if let Some(user) = users::get_user_by_id(&state.db, user_id).await? {
                    return Ok(CurrentUser(user));
                }
                tracing::debug!("token resolved to unknown user id {}", user_id);
                return Err(ApiError::Unauthorized);
            }
            Err(e) => {
                tracing::debug!("token verification failed: {}", e);
            }
        }

        // Path 2: the principal is a username
        let user = users::get_user_by_username(&state.db, &principal)
            .await?
            .ok_or(ApiError::Unauthorized)?;

        if !users::verify_password(&secret, &user.password_hash)? {
            tracing::debug!("password mismatch for user {}", user.username);
            return Err(ApiError::Unauthorized);
        }

        Ok(CurrentUser(user))
    }
}

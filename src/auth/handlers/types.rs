/**
 * Authentication Handler Types
 *
 * Request and response types shared by the user and token handlers.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Requested username (must be unique)
    pub username: String,
    /// Plaintext password (hashed before storage, never persisted as-is)
    pub password: String,
}

/// User response (without sensitive data)
///
/// The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User id
    pub id: i64,
    /// Username
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Token response
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed auth token, usable as the Basic principal on later requests
    pub token: String,
}

/**
 * API Error Types
 *
 * This module defines the error taxonomy used by HTTP handlers. Every error
 * is terminal for its request and maps to exactly one HTTP status code; the
 * mapping lives in `conversion.rs`.
 */

use thiserror::Error;

/// Errors surfaced by API handlers.
///
/// The first five variants form the client-visible taxonomy (400, 409, 401,
/// 404, 403). The remaining variants wrap internal failures; they map to a
/// 500 response with a generic body, and their detail is only logged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request data
    #[error("{0}")]
    Validation(String),

    /// Resource conflicts with existing state
    #[error("{0}")]
    Conflict(String),

    /// Bad, missing, or expired credentials
    #[error("unauthorized")]
    Unauthorized,

    /// Unknown resource id
    #[error("not found")]
    NotFound,

    /// Authenticated but not the owner of the resource
    #[error("forbidden")]
    Forbidden,

    /// Database failure
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// Password hashing or verification failure
    #[error("password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token encoding failure
    #[error("token encoding error: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}

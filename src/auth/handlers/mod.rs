//! Authentication Handlers Module
//!
//! HTTP handlers for the user and token endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/users - User registration
//! - **`get_user`** - GET /api/users/{id} - Public user lookup
//! - **`issue_token`** - GET /api/token - Mint an auth token

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// User lookup handler
pub mod user;

/// Token issuance handler
pub mod token;

// Re-export commonly used types
pub use types::{RegisterRequest, TokenResponse, UserResponse};

// Re-export handlers
pub use register::register;
pub use token::issue_token;
pub use user::get_user;

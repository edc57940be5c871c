//! Authentication Module
//!
//! This module handles user registration, password verification, auth token
//! management, and the request-level auth gate.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model, database operations, password hashing
//! ├── tokens.rs       - Signed auth token issuance and verification
//! ├── gate.rs         - CurrentUser extractor (HTTP Basic resolution)
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── user.rs     - User lookup handler
//!     └── token.rs    - Token issuance handler
//! ```
//!
//! # Authentication Flow
//!
//! Every protected request carries HTTP Basic credentials. The gate first
//! treats the principal as a signed token; if that fails it falls back to a
//! username/password check. Both failure modes collapse into a single 401
//! so clients cannot distinguish an expired token from a bad password.

/// User data model, database operations, and password hashing
pub mod users;

/// Auth token issuance and verification
pub mod tokens;

/// Request authentication gate
pub mod gate;

/// HTTP handlers for the user and token endpoints
pub mod handlers;

// Re-export commonly used types
pub use gate::CurrentUser;
pub use tokens::{TokenError, TokenService};
pub use users::User;

//! IdeaBank - Main Library
//!
//! IdeaBank is a small HTTP JSON API for tracking private text notes
//! ("ideas"). Users register with a username and password, authenticate with
//! HTTP Basic credentials or a short-lived signed token, and manage ideas
//! that only they can read, update, or delete.
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`server`** - Configuration, application state, server initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, password hashing, tokens, and the auth gate
//! - **`ideas`** - Idea persistence and CRUD handlers
//! - **`error`** - API error taxonomy and HTTP response conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use ideabank::server::config::Config;
//! use ideabank::server::init::create_app;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let config = Config::from_env();
//! let app = create_app(&config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

/// Configuration, state, and server initialization
pub mod server;

/// HTTP route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Idea persistence and handlers
pub mod ideas;

/// API error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::config::Config;
pub use server::init::create_app;
pub use server::state::AppState;

//! Server Module
//!
//! This module contains the code for initializing and configuring the Axum
//! HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports
//! ├── config.rs       - Configuration loading and database setup
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Server initialization and app creation
//! ```

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::Config;
pub use init::create_app;
pub use state::AppState;

//! Routes Module
//!
//! HTTP route configuration for the API.

/// Router assembly
pub mod router;

pub use router::create_router;

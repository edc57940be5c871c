//! Ideas Module
//!
//! This module handles idea persistence and the idea CRUD endpoints.

/// Idea model and database operations
pub mod db;

/// HTTP handlers for the idea endpoints
pub mod handlers;

/// Request and response types
pub mod types;

pub use db::Idea;
pub use types::{IdeaPayload, IdeaResponse};

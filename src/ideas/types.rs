/**
 * Idea Handler Types
 *
 * Request and response types for the idea endpoints.
 */

use serde::{Deserialize, Serialize};

use crate::ideas::db::Idea;

/// Create/update request body.
///
/// Any other field in the body (an owner id in particular) is ignored:
/// ownership always comes from the authenticated user.
#[derive(Debug, Serialize, Deserialize)]
pub struct IdeaPayload {
    /// Idea name
    pub name: String,
    /// Idea description
    pub description: String,
}

/// Idea response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaResponse {
    /// Idea id
    pub id: i64,
    /// Idea name
    pub name: String,
    /// Idea description
    pub description: String,
}

impl From<Idea> for IdeaResponse {
    fn from(idea: Idea) -> Self {
        Self {
            id: idea.id,
            name: idea.name,
            description: idea.description,
        }
    }
}

//! Database operations for ideas
//!
//! Every query is either keyed by idea id (the handler then enforces
//! ownership) or scoped to a single owner (listing).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Idea struct representing an idea row in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Idea {
    /// Unique idea id
    pub id: i64,
    /// Idea name
    pub name: String,
    /// Idea description
    pub description: String,
    /// Owning user id
    pub user_id: i64,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new idea owned by `user_id`.
pub async fn create_idea(
    pool: &SqlitePool,
    user_id: i64,
    name: &str,
    description: &str,
) -> Result<Idea, sqlx::Error> {
    let now = Utc::now();

    let idea = sqlx::query_as::<_, Idea>(
        r#"
        INSERT INTO ideas (name, description, user_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, name, description, user_id, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(user_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(idea)
}

/// Get an idea by id, or `None` if not found.
pub async fn get_idea_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Idea>, sqlx::Error> {
    let idea = sqlx::query_as::<_, Idea>(
        r#"
        SELECT id, name, description, user_id, created_at, updated_at
        FROM ideas
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(idea)
}

/// Get all ideas owned by a user, oldest first.
pub async fn get_ideas_for_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<Idea>, sqlx::Error> {
    let ideas = sqlx::query_as::<_, Idea>(
        r#"
        SELECT id, name, description, user_id, created_at, updated_at
        FROM ideas
        WHERE user_id = ?
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(ideas)
}

/// Update an idea's name and description.
pub async fn update_idea(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    description: &str,
) -> Result<Idea, sqlx::Error> {
    let now = Utc::now();

    let idea = sqlx::query_as::<_, Idea>(
        r#"
        UPDATE ideas
        SET name = ?, description = ?, updated_at = ?
        WHERE id = ?
        RETURNING id, name, description, user_id, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(now)
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(idea)
}

/// Delete an idea by id.
pub async fn delete_idea(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM ideas WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/**
 * User Model and Database Operations
 *
 * This module handles user data, database operations, and password hashing.
 *
 * # Security
 *
 * Plaintext passwords never reach the database: callers hash with
 * `hash_password` (bcrypt, salted) before insert, and `verify_password`
 * recomputes and compares through bcrypt's constant-time check.
 */

use bcrypt::DEFAULT_COST;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User struct representing a user row in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user id
    pub id: i64,
    /// Username (unique)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Hash a plaintext password with bcrypt.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, DEFAULT_COST)
}

/// Verify a candidate password against a stored bcrypt hash.
pub fn verify_password(candidate: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(candidate, hash)
}

/// Create a new user.
///
/// `password_hash` must already be a bcrypt hash. A duplicate username
/// violates the UNIQUE constraint and surfaces as a database error.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, password_hash, created_at)
        VALUES (?, ?, ?)
        RETURNING id, username, password_hash, created_at
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get a user by id, or `None` if not found.
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get a user by username, or `None` if not found.
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, created_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

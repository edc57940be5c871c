//! Authentication test helpers
//!
//! Utilities for creating test users and building Basic auth headers.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sqlx::SqlitePool;

use ideabank::auth::users::{create_user, hash_password};

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// Create a test user directly in the database.
pub async fn create_test_user(pool: &SqlitePool, username: &str, password: &str) -> TestUser {
    let password_hash = hash_password(password).unwrap();
    let user = create_user(pool, username, &password_hash).await.unwrap();

    TestUser {
        id: user.id,
        username: user.username,
        password: password.to_string(),
    }
}

/// Build an `Authorization: Basic` header value.
pub fn basic_auth(principal: &str, secret: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", principal, secret)))
}

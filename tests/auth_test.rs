//! Authentication API integration tests
//!
//! Tests for registration, user lookup, and token issuance.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use common::auth_helpers::{basic_auth, create_test_user};
use common::{test_server, test_server_with_token_ttl};

#[tokio::test]
async fn test_health_check() {
    let (server, _pool) = test_server().await;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_register_success() {
    let (server, _pool) = test_server().await;

    let response = server
        .post("/api/users")
        .json(&serde_json::json!({
            "username": "alice",
            "password": "secret"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["username"], "alice");
    assert!(body["id"].as_i64().unwrap() > 0);
    // The password hash must never appear in a response
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_missing_field() {
    let (server, _pool) = test_server().await;

    let response = server
        .post("/api/users")
        .json(&serde_json::json!({ "username": "alice" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_empty_username() {
    let (server, _pool) = test_server().await;

    let response = server
        .post("/api/users")
        .json(&serde_json::json!({
            "username": "",
            "password": "secret"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let (server, pool) = test_server().await;

    create_test_user(&pool, "alice", "secret").await;

    let response = server
        .post("/api/users")
        .json(&serde_json::json!({
            "username": "alice",
            "password": "another-secret"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_get_user_success() {
    let (server, pool) = test_server().await;

    let user = create_test_user(&pool, "alice", "secret").await;

    let response = server.get(&format!("/api/users/{}", user.id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], user.id);
    assert_eq!(body["username"], "alice");
}

#[tokio::test]
async fn test_get_user_unknown_id() {
    let (server, _pool) = test_server().await;

    let response = server.get("/api/users/9999").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_token_with_password_auth() {
    let (server, pool) = test_server().await;

    let user = create_test_user(&pool, "alice", "secret").await;

    let response = server
        .get("/api/token")
        .add_header(AUTHORIZATION, basic_auth(&user.username, &user.password))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_token_rejects_wrong_password() {
    let (server, pool) = test_server().await;

    create_test_user(&pool, "alice", "secret").await;

    let response = server
        .get("/api/token")
        .add_header(AUTHORIZATION, basic_auth("alice", "wrong-password"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_rejects_unknown_user() {
    let (server, _pool) = test_server().await;

    let response = server
        .get("/api/token")
        .add_header(AUTHORIZATION, basic_auth("nobody", "secret"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_without_credentials() {
    let (server, _pool) = test_server().await;

    let response = server.get("/api/token").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_authorization_header() {
    let (server, _pool) = test_server().await;

    let response = server
        .get("/api/token")
        .add_header(AUTHORIZATION, "Basic !!!not-base64!!!")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_usable_as_basic_principal() {
    let (server, pool) = test_server().await;

    let user = create_test_user(&pool, "alice", "secret").await;

    let response = server
        .get("/api/token")
        .add_header(AUTHORIZATION, basic_auth(&user.username, &user.password))
        .await;
    let token = response.json::<serde_json::Value>()["token"]
        .as_str()
        .unwrap()
        .to_string();

    // The secret part is ignored when the principal is a valid token
    let response = server
        .get("/api/token")
        .add_header(AUTHORIZATION, basic_auth(&token, "unused"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let (server, pool) = test_server_with_token_ttl(-120).await;

    let user = create_test_user(&pool, "alice", "secret").await;

    // Password auth still works, but every token this server mints is
    // already past its validity window.
    let response = server
        .get("/api/token")
        .add_header(AUTHORIZATION, basic_auth(&user.username, &user.password))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let token = response.json::<serde_json::Value>()["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server
        .get("/api/token")
        .add_header(AUTHORIZATION, basic_auth(&token, "unused"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

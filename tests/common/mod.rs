//! Shared helpers for Web API integration tests.

#![allow(dead_code)]

use axum::http::StatusCode;
use axum_test::TestServer;
use postboard::config::WebConfig;
use postboard::db::Role;
use postboard::{register_with_role, AppState, Database, RegistrationRequest};
use serde_json::{json, Value};
use std::sync::Arc;

/// Password satisfying the policy, shared by most test users.
pub const PASSWORD: &str = "Passw0rdX";

/// Create a test configuration.
pub fn create_test_config() -> WebConfig {
    WebConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: "test-secret-key-for-testing-only".to_string(),
        ..WebConfig::default()
    }
}

/// Create a test server with an in-memory database.
pub async fn create_test_server() -> (TestServer, Database) {
    create_test_server_with_config(create_test_config()).await
}

/// Create a test server from a custom configuration.
pub async fn create_test_server_with_config(config: WebConfig) -> (TestServer, Database) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(
        AppState::from_config(db.clone(), &config).expect("Failed to create app state"),
    );
    let router = postboard::create_router(app_state, &config.cors_origins);
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db)
}

/// Format an Authorization header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Register a member through the API.
pub async fn register_user(server: &TestServer, user_id: &str, password: &str, nickname: &str) {
    let response = server
        .post("/api/users")
        .json(&json!({
            "user_id": user_id,
            "password": password,
            "nickname": nickname
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
}

/// Create an administrator directly in the database.
pub async fn create_admin(db: &Database, user_id: &str, password: &str) {
    let request = RegistrationRequest::new(user_id, password, "admin");
    register_with_role(db.pool(), &request, Role::Admin)
        .await
        .expect("Failed to create admin");
}

/// Log in and return the access token.
pub async fn login(server: &TestServer, user_id: &str, password: &str) -> String {
    let response = server
        .post("/api/users/login")
        .json(&json!({ "user_id": user_id, "password": password }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["token_type"], "bearer");
    body["access_token"].as_str().unwrap().to_string()
}

/// Register a member and log them in.
pub async fn register_and_login(server: &TestServer, user_id: &str) -> String {
    register_user(server, user_id, PASSWORD, user_id).await;
    login(server, user_id, PASSWORD).await
}

/// Create a post as `author` and return its ID.
pub async fn create_post(server: &TestServer, token: &str, author: &str, title: &str) -> i64 {
    server
        .post("/api/posts")
        .add_header(axum::http::header::AUTHORIZATION, bearer(token))
        .json(&json!({ "author": author, "title": title, "content": "body" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get(&format!("/api/users/{author}/posts")).await;
    let body = response.json::<Value>();
    body["data"]
        .as_array()
        .and_then(|posts| posts.iter().rev().find(|p| p["title"] == title))
        .and_then(|p| p["post_id"].as_i64())
        .expect("created post not listed")
}

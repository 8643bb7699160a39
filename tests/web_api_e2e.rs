//! Web API End-to-End Scenario Tests
//!
//! These tests verify complete user flows across multiple API endpoints.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use common::*;
use serde_json::{json, Value};

// ============================================================================
// E2E Scenario: Register, Login, Post, Edit Attempt, Delete
// ============================================================================

#[tokio::test]
async fn test_e2e_post_lifecycle() {
    let (server, _db) = create_test_server().await;

    // Step 1: Register
    server
        .post("/api/users")
        .json(&json!({
            "user_id": "admin01",
            "password": "A1234567890",
            "nickname": "admin"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    // Step 2: Login
    let token = login(&server, "admin01", "A1234567890").await;

    // Step 3: Create a post
    server
        .post("/api/posts")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "author": "admin01", "title": "t", "content": "c" }))
        .await
        .assert_status(StatusCode::CREATED);

    let list = server.get("/api/posts").await.json::<Value>();
    let post_id = list["data"][0]["post_id"].as_i64().unwrap();

    // Step 4: Read it back
    let response = server.get(&format!("/api/posts/{post_id}")).await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["post_id"], post_id);
    assert_eq!(body["data"]["author"], "admin01");
    assert_eq!(body["data"]["title"], "t");
    assert_eq!(body["data"]["content"], "c");

    // Step 5: Another user cannot edit it
    let other = register_and_login(&server, "intruder").await;
    let response = server
        .put(&format!("/api/posts/{post_id}"))
        .add_header(AUTHORIZATION, bearer(&other))
        .json(&json!({ "author": "admin01", "title": "hacked", "content": "x" }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(response.json::<Value>()["code"], "FORBIDDEN");

    // Step 6: The owner deletes it
    server
        .delete(&format!("/api/posts/{post_id}"))
        .add_header(AUTHORIZATION, bearer(&token))
        .await
        .assert_status_ok();

    server
        .get(&format!("/api/posts/{post_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ============================================================================
// E2E Scenario: Discussion With Moderation
// ============================================================================

#[tokio::test]
async fn test_e2e_discussion_with_moderation() {
    let (server, db) = create_test_server().await;
    create_admin(&db, "moderator", "ModPass99").await;
    let admin = login(&server, "moderator", "ModPass99").await;

    let alice = register_and_login(&server, "alice").await;
    let bob = register_and_login(&server, "bob").await;

    // Alice starts a thread, Bob replies twice
    let post_id = create_post(&server, &alice, "alice", "Weekend plans").await;
    for content in ["Hiking?", "Buy cheap watches here"] {
        server
            .post("/api/comments")
            .json(&json!({ "author_id": "bob", "post_id": post_id, "content": content }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let comments = server
        .get(&format!("/api/posts/{post_id}/comments"))
        .await
        .json::<Value>();
    let spam_id = comments["data"][1]["com_id"].as_i64().unwrap();

    // Alice cannot remove Bob's comment, the moderator can
    server
        .delete(&format!("/api/comments/{spam_id}"))
        .add_header(AUTHORIZATION, bearer(&alice))
        .await
        .assert_status(StatusCode::FORBIDDEN);
    server
        .delete(&format!("/api/comments/{spam_id}"))
        .add_header(AUTHORIZATION, bearer(&admin))
        .await
        .assert_status_ok();

    let comments = server
        .get(&format!("/api/posts/{post_id}/comments"))
        .await
        .json::<Value>();
    let remaining = comments["data"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["content"], "Hiking?");

    // The moderator removes Bob's account; his remaining comment goes with it
    server
        .delete("/api/users/bob")
        .add_header(AUTHORIZATION, bearer(&admin))
        .await
        .assert_status_ok();

    let comments = server
        .get(&format!("/api/posts/{post_id}/comments"))
        .await
        .json::<Value>();
    assert!(comments["data"].as_array().unwrap().is_empty());

    // Bob's token no longer authenticates
    server
        .post("/api/posts")
        .add_header(AUTHORIZATION, bearer(&bob))
        .json(&json!({ "author": "bob", "title": "back", "content": "x" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

// ============================================================================
// E2E Scenario: Session Lifecycle
// ============================================================================

#[tokio::test]
async fn test_e2e_session_lifecycle() {
    let (server, _db) = create_test_server().await;
    register_user(&server, "alice", PASSWORD, "Alice").await;

    // Two independent sessions
    let laptop = login(&server, "alice", PASSWORD).await;
    let phone = login(&server, "alice", PASSWORD).await;
    assert_ne!(laptop, phone);

    // Logging out one leaves the other active
    server
        .post("/api/users/logout")
        .add_header(AUTHORIZATION, bearer(&laptop))
        .await
        .assert_status_ok();

    server
        .post("/api/posts")
        .add_header(AUTHORIZATION, bearer(&laptop))
        .json(&json!({ "author": "alice", "title": "t", "content": "c" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .post("/api/posts")
        .add_header(AUTHORIZATION, bearer(&phone))
        .json(&json!({ "author": "alice", "title": "t", "content": "c" }))
        .await
        .assert_status(StatusCode::CREATED);
}

//! User endpoint integration tests
//!
//! Covers signup validation and the duplicate-email rule, the uniform
//! login failure, token issuance through the `x-auth` header, and the
//! protected current-user endpoint.

mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use todo_api::auth::handlers::types::UserResponse;
use todo_api::auth::users;

use common::{seed_user, seed_user_with_token, test_server};

fn x_auth(token: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-auth"),
        HeaderValue::from_str(token).expect("token is not a valid header value"),
    )
}

#[tokio::test]
async fn test_create_user() {
    let (server, pool) = test_server().await;

    let email = "example@example.com";
    let password = "abcdefgh";
    let response = server
        .post("/users")
        .json(&json!({ "email": email, "password": password }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let token = response
        .headers()
        .get("x-auth")
        .expect("x-auth header missing")
        .to_str()
        .unwrap()
        .to_string();
    assert!(!token.is_empty());

    let body: UserResponse = response.json();
    assert_eq!(body.email, email);
    assert!(!body.id.is_empty());

    // The stored document carries a hash, never the raw password.
    let stored = users::find_by_email(&pool, email).await.unwrap().unwrap();
    assert_ne!(stored.password_hash, password);
    assert!(bcrypt::verify(password, &stored.password_hash).unwrap());

    // The issued token is persisted with the "auth" scope.
    assert_eq!(stored.tokens.0.len(), 1);
    assert_eq!(stored.tokens.0[0].access, "auth");
    assert_eq!(stored.tokens.0[0].token, token);
}

#[tokio::test]
async fn test_create_user_invalid_email() {
    let (server, pool) = test_server().await;

    let response = server
        .post("/users")
        .json(&json!({ "email": "notAnEmail", "password": "abcdefgh" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(users::find_by_email(&pool, "notAnEmail")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_create_user_short_password() {
    let (server, _pool) = test_server().await;

    let response = server
        .post("/users")
        .json(&json!({ "email": "example@example.com", "password": "123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_missing_fields() {
    let (server, _pool) = test_server().await;

    let response = server.post("/users").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let (server, pool) = test_server().await;
    let existing = seed_user(&pool, "eric@example.com", "SecondPassword").await;

    let response = server
        .post("/users")
        .json(&json!({ "email": "eric@example.com", "password": "abcdefgh" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    // The existing record is untouched.
    let stored = users::find_by_email(&pool, "eric@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, existing.id);
    assert_eq!(stored.password_hash, existing.password_hash);
}

#[tokio::test]
async fn test_login() {
    let (server, pool) = test_server().await;
    let user = seed_user(&pool, "shawn@example.com", "FirstPassword").await;

    let response = server
        .post("/users/login")
        .json(&json!({ "email": "shawn@example.com", "password": "FirstPassword" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let token = response
        .headers()
        .get("x-auth")
        .expect("x-auth header missing")
        .to_str()
        .unwrap()
        .to_string();

    let body: UserResponse = response.json();
    assert_eq!(body.id, user.id);
    assert_eq!(body.email, user.email);

    // Login appends the token to the persisted list and the token
    // resolves back to the same user.
    let stored = users::find_by_id(&pool, &user.id).await.unwrap().unwrap();
    assert_eq!(stored.tokens.0.len(), 1);
    assert_eq!(stored.tokens.0[0].token, token);

    let resolved = users::find_by_token(&pool, &token).await.unwrap().unwrap();
    assert_eq!(resolved.id, user.id);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (server, pool) = test_server().await;
    seed_user(&pool, "shawn@example.com", "FirstPassword").await;

    let response = server
        .post("/users/login")
        .json(&json!({ "email": "shawn@example.com", "password": "WrongPassword" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    // No token is issued on a failed login.
    let stored = users::find_by_email(&pool, "shawn@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(stored.tokens.0.is_empty());
}

#[tokio::test]
async fn test_login_unknown_email() {
    let (server, _pool) = test_server().await;

    let response = server
        .post("/users/login")
        .json(&json!({ "email": "nobody@example.com", "password": "whatever1" }))
        .await;

    // Same status as a wrong password: no hint about which field failed.
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_me_with_valid_token() {
    let (server, pool) = test_server().await;
    let (user, token) = seed_user_with_token(&pool, "shawn@example.com", "FirstPassword").await;

    let (name, value) = x_auth(&token);
    let response = server.get("/users/me").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: UserResponse = response.json();
    assert_eq!(body.id, user.id);
    assert_eq!(body.email, user.email);
}

#[tokio::test]
async fn test_me_without_token() {
    let (server, _pool) = test_server().await;

    let response = server.get("/users/me").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let (server, pool) = test_server().await;
    seed_user_with_token(&pool, "shawn@example.com", "FirstPassword").await;

    let (name, value) = x_auth("not.a.token");
    let response = server.get("/users/me").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_unpersisted_token() {
    let (server, pool) = test_server().await;
    let user = seed_user(&pool, "shawn@example.com", "FirstPassword").await;

    // A correctly signed token that was never added to the user's
    // token list must not authenticate.
    let token = todo_api::auth::tokens::create_token(&user.id).unwrap();

    let (name, value) = x_auth(&token);
    let response = server.get("/users/me").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

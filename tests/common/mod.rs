//! Shared test fixtures
//!
//! Each test gets an isolated in-memory store (single-connection pool,
//! migrated up front) and a `TestServer` built from the same
//! `create_app` used in production. Seed data mirrors the fixtures the
//! API was originally tested against: two todos (the second completed
//! at timestamp 333) and users created through the real model
//! operations.

#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use todo_api::auth::users::{self, User};
use todo_api::create_app;
use todo_api::todos::model;
use todo_api::todos::Todo;

/// Low bcrypt cost to keep seeding fast; handlers still use the
/// default cost.
const TEST_BCRYPT_COST: u32 = 4;

/// Open an isolated in-memory store with the schema applied.
///
/// A single connection keeps every query on the same in-memory
/// database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory store");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

/// Build a test server plus a handle to its store.
pub async fn test_server() -> (TestServer, SqlitePool) {
    let pool = test_pool().await;
    let server = TestServer::new(create_app(pool.clone())).expect("failed to build test server");
    (server, pool)
}

/// Seed the two standard todos; the second is completed at 333.
pub async fn seed_todos(pool: &SqlitePool) -> (Todo, Todo) {
    let first = model::create(pool, "First dummy todo")
        .await
        .expect("failed to seed todo");

    let second = model::create(pool, "Second dummy todo")
        .await
        .expect("failed to seed todo");
    let second = model::update_by_id(pool, &second.id, None, true, Some(333))
        .await
        .expect("failed to seed todo")
        .expect("seeded todo missing");

    (first, second)
}

/// Create a user through the real model path.
pub async fn seed_user(pool: &SqlitePool, email: &str, password: &str) -> User {
    let password_hash =
        bcrypt::hash(password, TEST_BCRYPT_COST).expect("failed to hash test password");
    users::create_user(pool, email, &password_hash)
        .await
        .expect("failed to seed user")
}

/// Create a user and issue a persisted auth token for it.
pub async fn seed_user_with_token(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> (User, String) {
    let user = seed_user(pool, email, password).await;
    let token = users::generate_auth_token(pool, &user)
        .await
        .expect("failed to issue test token");
    (user, token)
}

/**
 * Server Configuration
 *
 * Loads configuration from environment variables:
 *
 * - `DATABASE_URL` - document store location, defaults to a local
 *   SQLite file created on demand
 * - `PORT` - HTTP listen port, defaults to 3000
 *
 * The store connection is opened once here and handed to the router;
 * tests substitute their own isolated in-memory pool instead.
 */

use sqlx::SqlitePool;

const DEFAULT_DATABASE_URL: &str = "sqlite:todos.db?mode=rwc";

/// Open the document store and apply pending migrations.
///
/// Reads `DATABASE_URL` from the environment, falling back to a local
/// SQLite file. The two collections (`todos`, `users`) are created by
/// the embedded migrations on first run.
pub async fn connect_store() -> Result<SqlitePool, sqlx::Error> {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    tracing::info!("Connecting to document store at {database_url}");
    let pool = SqlitePool::connect(&database_url).await?;

    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Store migrations applied");

    Ok(pool)
}

/// HTTP listen port from the `PORT` environment variable, default 3000.
pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000)
}

/**
 * Todo API Server Entry Point
 *
 * Initializes logging, opens the document store, and starts the Axum
 * HTTP server on the port given by the PORT environment variable.
 */

use tracing_subscriber::EnvFilter;

use todo_api::server::config::{connect_store, server_port};
use todo_api::server::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // One store connection pool for the whole process; every request
    // shares it through the application state.
    let pool = connect_store().await?;
    let app = create_app(pool);

    let port = server_port();
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Started up on port {port}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

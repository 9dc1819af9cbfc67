use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Inventory service entry point
///
/// Initializes logging and configuration, opens the store, wires the use
/// cases, and serves the JSON API together with the browser client.
///
/// Layout:
/// - config/: Server, CORS, and database settings read from the environment
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs, error mapping, and the embedded web client
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables (so RUST_LOG may come from .env)
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Initialize database
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies and create the schema
    let container = DependencyContainer::new(pool).await?;

    // 6. Run server until Ctrl-C, then close the store
    Server::run(config, container).await?;

    Ok(())
}

use persistence::db::{DatabaseConfig, create_sqlite_pool};
use sqlx::SqlitePool;
use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://inventory.db";

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: SQLite connection string (default: "sqlite://inventory.db",
///   the file is created when missing)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
///
/// # Errors
/// Returns error if DATABASE_MAX_CONNECTIONS is not a number or the database
/// cannot be opened
pub async fn init_database() -> anyhow::Result<SqlitePool> {
    let db_url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
    let mut config = DatabaseConfig::new(db_url);
    if let Ok(raw) = env::var("DATABASE_MAX_CONNECTIONS") {
        config.max_connections = raw.trim().parse()?;
    }

    tracing::info!(url = %config.connection_string, "Opening database");
    let pool = create_sqlite_pool(&config).await?;
    Ok(pool)
}

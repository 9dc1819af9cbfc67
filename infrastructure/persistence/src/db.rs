use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::{str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.schema_error")]
    SchemaError,
}

/// The single table backing the inventory.
///
/// `AUTOINCREMENT` keeps ids strictly increasing and never reused after a delete.
pub const PRODUCTS_SCHEMA: &str = r#"CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(trim(name)) > 0),
    code TEXT NOT NULL UNIQUE CHECK (length(trim(code)) > 0),
    description TEXT,
    quantity INTEGER NOT NULL DEFAULT 0 CHECK (quantity >= 0)
)"#;

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// Private in-memory database. Every pooled connection would get its own
    /// empty database, so the pool is pinned to a single connection.
    pub fn in_memory() -> Self {
        Self {
            connection_string: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Creates a SQLite connection pool, creating the database file if missing
pub async fn create_sqlite_pool(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::from_str(&config.connection_string)
        .map_err(|e| {
            tracing::error!(error = %e, "Invalid database connection string");
            DatabaseError::ConnectionError
        })?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to open database");
            DatabaseError::ConnectionError
        })?;

    Ok(pool)
}

/// Creates the products table when it does not exist yet
pub async fn init_schema(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::query(PRODUCTS_SCHEMA)
        .execute(pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to create products table");
            DatabaseError::SchemaError
        })?;

    tracing::info!("Products table ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_create_schema_idempotently() {
        let pool = create_sqlite_pool(&DatabaseConfig::in_memory())
            .await
            .unwrap();

        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();

        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'products'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn should_reject_negative_quantity_at_schema_level() {
        let pool = create_sqlite_pool(&DatabaseConfig::in_memory())
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();

        let result =
            sqlx::query("INSERT INTO products (name, code, quantity) VALUES ('A', 'A1', -1)")
                .execute(&pool)
                .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn should_fail_to_connect_when_directory_missing() {
        let config = DatabaseConfig::new(
            "sqlite:/nonexistent-inventory-dir/nested/inventory.db".to_string(),
        );

        let result = create_sqlite_pool(&config).await;

        assert!(matches!(result, Err(DatabaseError::ConnectionError)));
    }

    #[test]
    fn should_default_pool_settings() {
        let config = DatabaseConfig::new("sqlite://inventory.db".to_string());

        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }
}

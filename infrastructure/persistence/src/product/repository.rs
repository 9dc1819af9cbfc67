use async_trait::async_trait;
use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{ProductId, Quantity};

use super::entity::ProductEntity;
use crate::db::init_schema;

pub struct ProductRepositorySqlite {
    pool: SqlitePool,
}

impl ProductRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Translates driver errors into repository errors. Constraint violations keep
/// their meaning; anything else is logged here and reported as an opaque
/// database error so no driver detail leaves the persistence layer.
fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return RepositoryError::duplicated();
        }
        if db_err.is_check_violation() {
            tracing::warn!(error = %db_err, "Check constraint rejected write");
            return RepositoryError::persistence();
        }
    }

    tracing::error!(error = %err, "Database operation failed");
    RepositoryError::database_error()
}

fn require_affected(rows: u64) -> Result<u64, RepositoryError> {
    if rows == 0 {
        return Err(RepositoryError::not_found());
    }
    Ok(rows)
}

#[async_trait]
impl ProductRepository for ProductRepositorySqlite {
    async fn init(&self) -> Result<(), RepositoryError> {
        init_schema(&self.pool)
            .await
            .map_err(|_| RepositoryError::database_error())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (name, code, description, quantity)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, code, description, quantity"#,
        )
        .bind(&product.name)
        .bind(&product.code)
        .bind(product.description.as_deref())
        .bind(product.quantity.value())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, code, description, quantity FROM products ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, code, description, quantity FROM products WHERE id = ?",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn update_quantity(
        &self,
        id: ProductId,
        quantity: Quantity,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query("UPDATE products SET quantity = ? WHERE id = ?")
            .bind(quantity.value())
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        require_affected(result.rows_affected())
    }

    async fn delete(&self, id: ProductId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        require_affected(result.rows_affected())
    }
}

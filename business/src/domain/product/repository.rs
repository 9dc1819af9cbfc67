use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};
use super::value_objects::{ProductId, Quantity};

/// Port for the product table.
///
/// `init` must run once before any other call; `close` releases the
/// underlying connections and leaves the repository unusable.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn init(&self) -> Result<(), RepositoryError>;
    async fn close(&self);
    /// Inserts the product and returns it with its store-assigned id.
    /// Fails with `Duplicated` when the code is already taken.
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    /// All products ordered by name ascending.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    /// Returns the number of affected rows, or `NotFound` when there were none.
    async fn update_quantity(
        &self,
        id: ProductId,
        quantity: Quantity,
    ) -> Result<u64, RepositoryError>;
    /// Returns the number of affected rows, or `NotFound` when there were none.
    async fn delete(&self, id: ProductId) -> Result<u64, RepositoryError>;
}

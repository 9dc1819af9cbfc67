use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;

pub struct DeleteProductParams {
    pub id: ProductId,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// Returns the number of deleted rows.
    async fn execute(&self, params: DeleteProductParams) -> Result<u64, ProductError>;
}

use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;

pub struct UpdateProductQuantityParams {
    pub id: ProductId,
    pub quantity: i64,
}

#[async_trait]
pub trait UpdateProductQuantityUseCase: Send + Sync {
    /// Returns the number of updated rows.
    async fn execute(&self, params: UpdateProductQuantityParams) -> Result<u64, ProductError>;
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update_quantity::{
    UpdateProductQuantityParams, UpdateProductQuantityUseCase,
};
use crate::domain::product::value_objects::Quantity;

pub struct UpdateProductQuantityUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductQuantityUseCase for UpdateProductQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateProductQuantityParams) -> Result<u64, ProductError> {
        self.logger.info(&format!(
            "Updating quantity of product {} to {}",
            params.id, params.quantity
        ));

        let quantity = Quantity::new(params.quantity)?;

        let affected_rows = self
            .repository
            .update_quantity(params.id, quantity)
            .await
            .map_err(|e| match ProductError::from_lookup(e) {
                ProductError::Repository(inner) => {
                    self.logger.error(&format!(
                        "Failed to update quantity of product {}: {}",
                        params.id, inner
                    ));
                    ProductError::Repository(inner)
                }
                other => other,
            })?;

        self.logger
            .info(&format!("Product quantity updated: {}", params.id));
        Ok(affected_rows)
    }
}

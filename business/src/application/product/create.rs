use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product with code: {}", params.code));

        let new_product = NewProduct::new(NewProductProps {
            name: params.name,
            code: params.code,
            description: params.description,
            quantity: params.quantity,
        })?;

        let product = self
            .repository
            .create(&new_product)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => {
                    self.logger
                        .warn(&format!("Product code already taken: {}", new_product.code));
                    ProductError::CodeTaken
                }
                other => {
                    self.logger
                        .error(&format!("Failed to create product: {}", other));
                    ProductError::Repository(other)
                }
            })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

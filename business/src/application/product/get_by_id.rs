use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match ProductError::from_lookup(e) {
                ProductError::Repository(inner) => {
                    self.logger.error(&format!(
                        "Failed to fetch product {}: {}",
                        params.id, inner
                    ));
                    ProductError::Repository(inner)
                }
                other => other,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::NewProduct;
    use crate::domain::product::value_objects::{ProductId, Quantity};
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn init(&self) -> Result<(), RepositoryError>;
            async fn close(&self);
            async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
            async fn update_quantity(&self, id: ProductId, quantity: Quantity) -> Result<u64, RepositoryError>;
            async fn delete(&self, id: ProductId) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let id = ProductId::from_repository(7);
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(|id| {
                Ok(Product::from_repository(
                    id,
                    "Widget".to_string(),
                    "W1".to_string(),
                    Some("Blue widget".to_string()),
                    Quantity::from_repository(5),
                ))
            });

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByIdParams { id })
            .await
            .unwrap();

        assert_eq!(product.id, id);
        assert_eq!(product.code, "W1");
        assert_eq!(product.description.as_deref(), Some("Blue widget"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_error().never();

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::from_repository(99),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_log_error_when_store_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_error()
            .withf(|message| message.contains("product 3"))
            .times(1)
            .returning(|_| ());

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::from_repository(3),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}

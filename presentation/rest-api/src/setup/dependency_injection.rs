use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositorySqlite;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update_quantity::UpdateProductQuantityUseCaseImpl;
use business::domain::product::repository::ProductRepository;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    /// Kept outside the APIs so the server can close it on shutdown.
    pub store: Arc<dyn ProductRepository>,
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    /// Wires every use case around one store and initializes the store's schema.
    pub async fn new(pool: sqlx::SqlitePool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let store: Arc<dyn ProductRepository> = Arc::new(ProductRepositorySqlite::new(pool));
        store.init().await?;

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: store.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: store.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: store.clone(),
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateProductQuantityUseCaseImpl {
            repository: store.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: store.clone(),
            logger,
        });

        let product_api = ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_quantity_use_case,
            delete_use_case,
        );

        Ok(Self {
            store,
            health_api: HealthApi,
            product_api,
        })
    }
}

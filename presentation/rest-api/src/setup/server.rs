use poem::{
    EndpointExt, Route, Server as PoemServer, get, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::api::web;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Full route tree: browser client at `/`, JSON API under `/api`, docs at `/docs`.
    pub fn routes(container: DependencyContainer, base_url: &str) -> Route {
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            "Inventory API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("{}/api", base_url));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .at("/", get(web::index))
            .at("/app.js", get(web::script))
            .at("/styles.css", get(web::stylesheet))
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let base_url = config.server.base_url();
        let store = container.store.clone();

        let app = Self::routes(container, &base_url)
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Inventory UI at {}/", base_url);
        tracing::info!("Swagger UI at {}/docs", base_url);
        tracing::info!("OpenAPI JSON at {}/openapi.json", base_url);

        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(
                app,
                async {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        tracing::error!(error = %e, "Failed to listen for shutdown signal");
                    }
                },
                None,
            )
            .await?;

        tracing::info!("Shutting down");
        store.close().await;
        Ok(())
    }
}

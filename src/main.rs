use std::sync::Arc;

use product_api::{
    app::{create_routes, product::repository::ProductRepository, AppState},
    config::{self, StorageBackend},
    infrastructure::{
        database::{create_tables, DatabaseManager},
        logger::Logger,
        memory::InMemoryProductRepository,
        postgres::PgProductRepository,
    },
};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = config::load_config()?;

    // 初始化日志
    Logger::init(&config.logging.level)?;

    match &source {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }

    let repository: Arc<dyn ProductRepository> = match config.database.backend {
        StorageBackend::Postgres => {
            let db = DatabaseManager::new(&config.database).await.map_err(|e| {
                error!("Failed to initialize database: {}", e);
                e
            })?;
            create_tables(db.get_pool()).await?;
            Arc::new(PgProductRepository::new(db.get_pool().clone()))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage, data is lost on shutdown");
            Arc::new(InMemoryProductRepository::new())
        }
    };

    let app = create_routes(AppState::new(repository), &config.http);

    let listener =
        TcpListener::bind((config.http.bind_address.as_str(), config.http.port)).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Product API running on http://{}", addr);
    info!("📖 Available endpoints:");
    info!("   GET    /health          - Health check");
    info!("   GET    /products        - List products");
    info!("   POST   /products        - Create product");
    info!("   GET    /products/:id    - Get product by ID");
    info!("   PUT    /products/:id    - Update product");
    info!("   DELETE /products/:id    - Delete product");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

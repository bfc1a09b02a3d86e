//! Driver Registry API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use driver_registry::domain::gateways::DriverRepository;
use driver_registry::infrastructure::driven_adapters::config::{
    AppConfig, LoggingConfig, StorageBackend,
};
use driver_registry::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use driver_registry::infrastructure::driven_adapters::{
    InMemoryDriverRepository, PostgresDriverRepository,
};
use driver_registry::infrastructure::driving_adapters::api_rest::{build_router, AppState};

fn init_tracing(logging: &LoggingConfig) {
    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(logging.json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!logging.json).then(tracing_subscriber::fmt::layer))
        .init();
}

async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn DriverRepository>> {
    match config.storage.backend {
        StorageBackend::Postgres => {
            let pool = create_pool(&config.database).await?;
            tracing::info!("Database connection pool created");

            run_migrations(&pool).await?;
            tracing::info!("Database migrations completed");

            Ok(Arc::new(PostgresDriverRepository::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; records are lost on shutdown");
            Ok(Arc::new(InMemoryDriverRepository::new()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    tracing::info!(backend = ?config.storage.backend, "Configuration loaded successfully");

    let driver_repository = build_repository(&config).await?;
    let app = build_router(AppState::new(driver_repository));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

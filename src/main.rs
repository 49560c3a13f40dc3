// Dataset server - Dependency injection and server setup
use std::sync::Arc;

use anyhow::Context;
use quarterly_dashboard::application::dataset_service::DatasetService;
use quarterly_dashboard::infrastructure::config::load_server_config;
use quarterly_dashboard::infrastructure::file_repository::FileDatasetRepository;
use quarterly_dashboard::init_tracing;
use quarterly_dashboard::presentation::app_state::AppState;
use quarterly_dashboard::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Load configuration
    let config = load_server_config()?;
    let addr = config.server.socket_addr()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(FileDatasetRepository::new(config.server.data_dir.clone()));

    // Create services (application layer)
    let dataset_service = DatasetService::new(repository);

    let state = Arc::new(AppState { dataset_service });

    // Build router (presentation layer)
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(
        "Server running at http://{} (data dir {})",
        addr,
        config.server.data_dir.display()
    );

    axum::serve(listener, router).await?;

    Ok(())
}

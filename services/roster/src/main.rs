use std::sync::Arc;

use anyhow::Result;
use common::{Documents, JsonFileStore};
use roster::{AppConfig, AppState, create_router, session::MemorySessionStore};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    // Initialize tracing
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Starting student roster service");

    let documents = Documents::new(Arc::new(JsonFileStore::new(&config.data_dir)));
    let state = AppState::new(documents, Arc::new(MemorySessionStore::new()), &config);
    state.ensure_documents().await?;
    info!("Documents ready in {}", config.data_dir.display());

    // Start the web server
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Roster service listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down student roster service");
}

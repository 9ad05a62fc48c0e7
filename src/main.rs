use product_catalog::{AppState, config::Config, create_router, db};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Configurazione mancante o malformata: errore fatale all'avvio
    let config = Config::from_env().inspect_err(|e| error!("Invalid configuration: {}", e))?;
    config.log_summary();

    let pool = db::connect(&config.database_url, config.max_connections)
        .await
        .inspect_err(|e| error!("Database initialization failed: {}", e))?;

    let state = Arc::new(AppState::new(pool, config.jwt.clone()));
    let app = create_router(state);

    let listener = TcpListener::bind((config.server_host.as_str(), config.server_port)).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

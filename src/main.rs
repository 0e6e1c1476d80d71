use anyhow::Context;
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;
use webpulse::{build_router, utils::init_logging, AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let state = AppState::from_config(&config).context("Failed to initialize providers")?;

    let app = build_router(Arc::new(state));

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("🚀 Server running on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

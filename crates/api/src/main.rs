use std::sync::Arc;

use anyhow::Context;

use coinbank_api::{app::services::AppServices, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    coinbank_observability::init();

    let config = Config::from_env()?;
    let app = coinbank_api::app::build_app(Arc::new(AppServices::new()));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

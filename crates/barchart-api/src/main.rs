//! Random bar chart server entry point.

use std::error::Error;
use std::sync::Arc;

use barchart_api::config::ServiceConfig;
use barchart_api::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting random bar chart server");

    let config = ServiceConfig::from_env()?;
    let addr = config.socket_addr()?;

    let app = barchart_api::app(AppState::new(Arc::new(config)));

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}

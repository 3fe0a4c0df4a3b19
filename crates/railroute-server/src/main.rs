//! railroute HTTP Server
//!
//! Provides REST API for routing payment instructions to a settlement rail.

use anyhow::Result;
use railroute_server::{
    api,
    config::{ConfigOrigin, ServerConfig},
    engine,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so its log level can seed the filter
    let (config, origin) = ServerConfig::load()?;

    init_tracing(&config)?;
    if let ConfigOrigin::Defaults(reason) = &origin {
        info!("No usable config source ({}), using default configuration", reason);
    }
    info!("Loaded configuration: {:?}", config);

    let service = engine::init_service(&config)?;
    let app = api::create_router(Arc::new(service));

    let addr = config.bind_address();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Routing API: http://{}/v1/route", addr);
    info!("  Metrics: http://{}/metrics", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(config: &ServerConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}

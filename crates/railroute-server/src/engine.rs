//! Routing service initialization
//!
//! Converts server configuration into SDK configuration.

use crate::config::ServerConfig;
use anyhow::Result;
use railroute_sdk::RoutingService;
use tracing::info;

/// Build the routing service the HTTP handlers share
pub fn init_service(config: &ServerConfig) -> Result<RoutingService> {
    let service = RoutingService::builder()
        .with_config(config.engine_config())
        .build()?;

    info!(
        "Routing service ready (metrics: {}, share base: {})",
        config.enable_metrics, config.share_base_url
    );

    Ok(service)
}

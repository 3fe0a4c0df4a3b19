//! Builder pattern for RoutingService

use crate::config::EngineConfig;
use crate::error::{Result, SdkError};
use crate::routing_service::RoutingService;
use railroute_runtime::MetricsCollector;
use std::sync::Arc;

/// Builder for RoutingService
///
/// # Example
///
/// ```rust
/// use railroute_sdk::RoutingServiceBuilder;
///
/// let service = RoutingServiceBuilder::new()
///     .with_share_base_url("https://routing.example.com/")
///     .enable_metrics(true)
///     .build()
///     .unwrap();
/// ```
pub struct RoutingServiceBuilder {
    config: EngineConfig,
    metrics: Option<Arc<MetricsCollector>>,
}

impl RoutingServiceBuilder {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            metrics: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.config.enable_metrics = enable;
        self
    }

    pub fn log_decisions(mut self, enable: bool) -> Self {
        self.config.log_decisions = enable;
        self
    }

    pub fn verify_invariants(mut self, enable: bool) -> Self {
        self.config.verify_invariants = enable;
        self
    }

    pub fn with_share_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.share_base_url = url.into();
        self
    }

    /// Share a metrics collector with other components (e.g. a metrics endpoint)
    pub fn with_metrics(mut self, metrics: Arc<MetricsCollector>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn build(self) -> Result<RoutingService> {
        if self.config.share_base_url.trim().is_empty() {
            return Err(SdkError::ConfigError(
                "share_base_url must not be empty".to_string(),
            ));
        }

        let metrics = self.metrics.unwrap_or_default();

        tracing::info!(
            enable_metrics = self.config.enable_metrics,
            verify_invariants = self.config.verify_invariants,
            "Routing service initialized"
        );

        Ok(RoutingService::from_parts(self.config, metrics))
    }
}

impl Default for RoutingServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

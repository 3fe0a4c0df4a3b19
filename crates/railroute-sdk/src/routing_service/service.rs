//! Core RoutingService implementation

use super::types::RouteResponse;
use crate::builder::RoutingServiceBuilder;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::query;
use railroute_core::{RoutingInputs, RoutingResult};
use railroute_runtime::{Metrics, MetricsCollector, RoutingDecisionEngine};
use std::sync::Arc;
use std::time::Instant;

pub struct RoutingService {
    engine: RoutingDecisionEngine,
    metrics: Arc<MetricsCollector>,
    config: EngineConfig,
}

impl RoutingService {
    pub(crate) fn from_parts(config: EngineConfig, metrics: Arc<MetricsCollector>) -> Self {
        Self {
            engine: RoutingDecisionEngine::new(),
            metrics,
            config,
        }
    }

    pub fn builder() -> RoutingServiceBuilder {
        RoutingServiceBuilder::new()
    }

    /// Generate a unique request ID
    /// Format: req_YYYYMMDDHHmmss_xxxxxx
    fn generate_request_id() -> String {
        use chrono::Utc;
        use rand::Rng;

        let datetime_str = Utc::now().format("%Y%m%d%H%M%S").to_string();
        let random: u32 = rand::thread_rng().gen_range(0..0x1000000);

        format!("req_{}_{:06x}", datetime_str, random)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn metrics(&self) -> Arc<MetricsCollector> {
        Arc::clone(&self.metrics)
    }

    /// Evaluate without ids, metrics or logging
    pub fn evaluate(&self, inputs: &RoutingInputs) -> RoutingResult {
        self.engine.evaluate(inputs)
    }

    /// Route one instruction. Never fails; invariant breaches are logged.
    pub fn route(&self, inputs: &RoutingInputs) -> RouteResponse {
        let response = self.route_inner(inputs);

        if self.config.verify_invariants {
            if let Err(e) = response.result.validate() {
                tracing::error!(
                    request_id = %response.request_id,
                    "Routing result failed validation: {}",
                    e
                );
            }
        }

        response
    }

    /// Route one instruction, returning an error if the audit trail is malformed
    pub fn route_strict(&self, inputs: &RoutingInputs) -> Result<RouteResponse> {
        let response = self.route_inner(inputs);
        response.result.validate()?;
        Ok(response)
    }

    /// Decode a saved query string and route it
    pub fn route_query(&self, query: &str) -> RouteResponse {
        self.route(&query::from_query_string(query))
    }

    /// Shareable link for these inputs under the configured base URL
    pub fn share_link(&self, inputs: &RoutingInputs) -> String {
        query::share_link(&self.config.share_base_url, inputs)
    }

    fn route_inner(&self, inputs: &RoutingInputs) -> RouteResponse {
        let request_id = Self::generate_request_id();

        let start = Instant::now();
        let result = self.engine.evaluate(inputs);
        let elapsed = start.elapsed();

        if self.config.enable_metrics {
            self.metrics
                .record_decision(result.route, result.is_out_of_scope(), elapsed);
        }

        if self.config.log_decisions {
            tracing::debug!(
                request_id = %request_id,
                route = %result.route,
                steps = result.steps.len(),
                payment_method = %inputs.payment_method,
                currency = %inputs.currency,
                is_pobo = inputs.is_pobo,
                "Routing decision made"
            );
        }

        RouteResponse {
            request_id,
            processing_time_us: elapsed.as_micros() as u64,
            share_query: query::to_query_string(inputs),
            result,
        }
    }
}

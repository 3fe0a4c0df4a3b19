//! Configuration types for RoutingService

use serde::{Deserialize, Serialize};

/// Main routing service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Record per-route counters and evaluation latency
    pub enable_metrics: bool,

    /// Emit a debug event for every decision
    pub log_decisions: bool,

    /// Check every result against the audit-trail invariants
    pub verify_invariants: bool,

    /// Base URL that share links are built from
    pub share_base_url: String,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            enable_metrics: true,
            log_decisions: true,
            verify_invariants: true,
            share_base_url: "/".to_string(),
        }
    }

    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = enable;
        self
    }

    pub fn log_decisions(mut self, enable: bool) -> Self {
        self.log_decisions = enable;
        self
    }

    pub fn verify_invariants(mut self, enable: bool) -> Self {
        self.verify_invariants = enable;
        self
    }

    pub fn with_share_base_url(mut self, url: impl Into<String>) -> Self {
        self.share_base_url = url.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

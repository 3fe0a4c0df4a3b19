//! Response types for RoutingService

use crate::error::Result;
use railroute_core::RoutingResult;
use serde::{Deserialize, Serialize};

/// Routing response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    /// Request ID (for tracking and correlation)
    pub request_id: String,

    /// Chosen rail and audit trail
    pub result: RoutingResult,

    /// Evaluation time in microseconds
    pub processing_time_us: u64,

    /// Encoded inputs, suitable for a share link
    pub share_query: String,
}

impl RouteResponse {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

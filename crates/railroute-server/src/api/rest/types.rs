//! REST API type definitions

use railroute_core::{LogicStepResult, RouteType};
use railroute_sdk::{RouteResponse, RoutingService};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RoutingService>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Routing response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteResponsePayload {
    pub request_id: String,
    pub route: RouteType,
    pub route_title: String,
    pub route_description: String,

    /// Evaluated steps only, in order
    pub steps: Vec<LogicStepResult>,

    pub share_link: String,
    pub process_time_us: u64,
}

impl RouteResponsePayload {
    pub fn from_response(response: RouteResponse, share_link: String) -> Self {
        let route = response.result.route;
        let profile = route.profile();

        Self {
            request_id: response.request_id,
            route,
            route_title: profile.title.to_string(),
            route_description: profile.description.to_string(),
            steps: response.result.steps,
            share_link,
            process_time_us: response.processing_time_us,
        }
    }
}

/// One rail in the priority legend
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteProfilePayload {
    pub route: RouteType,
    pub title: String,
    pub description: String,
    pub priority: usize,
}

impl From<RouteType> for RouteProfilePayload {
    fn from(route: RouteType) -> Self {
        let profile = route.profile();
        Self {
            route,
            title: profile.title.to_string(),
            description: profile.description.to_string(),
            priority: route.priority(),
        }
    }
}

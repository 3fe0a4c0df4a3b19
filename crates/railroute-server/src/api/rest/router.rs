//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::get,
    Router,
};
use railroute_sdk::RoutingService;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(service: Arc<RoutingService>) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/v1/route", get(route_query).post(route_json))
        .route("/v1/route/render", get(render))
        .route("/v1/routes", get(list_routes))
        .route("/v1/routes/:route", get(get_route))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

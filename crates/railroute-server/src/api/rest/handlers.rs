//! API endpoint handlers

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{
    extract::{Path, RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use railroute_core::{RouteType, RoutingInputs};
use railroute_sdk::{from_query_string, render_decision_path};
use tracing::info;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Route inputs encoded as a share-link query string
pub(super) async fn route_query(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<RouteResponsePayload>, ServerError> {
    let inputs = from_query_string(query.as_deref().unwrap_or_default());
    route_inputs(&state, inputs).map(Json)
}

/// Route inputs posted as JSON
#[axum::debug_handler]
pub(super) async fn route_json(
    State(state): State<AppState>,
    JsonExtractor(inputs): JsonExtractor<RoutingInputs>,
) -> Result<Json<RouteResponsePayload>, ServerError> {
    route_inputs(&state, inputs).map(Json)
}

fn route_inputs(state: &AppState, inputs: RoutingInputs) -> Result<RouteResponsePayload, ServerError> {
    let response = state.service.route_strict(&inputs)?;

    info!(
        "Routed {} as {} after {} steps",
        response.request_id,
        response.result.route,
        response.result.steps.len()
    );

    let share_link = state.service.share_link(&inputs);
    Ok(RouteResponsePayload::from_response(response, share_link))
}

/// Plain-text decision path for a share-link query string
pub(super) async fn render(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, ServerError> {
    let inputs = from_query_string(query.as_deref().unwrap_or_default());
    let response = state.service.route_strict(&inputs)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_decision_path(&response.result),
    )
        .into_response())
}

/// All rails in priority order
pub(super) async fn list_routes() -> Json<Vec<RouteProfilePayload>> {
    Json(
        RouteType::PRIORITY
            .into_iter()
            .map(RouteProfilePayload::from)
            .collect(),
    )
}

/// Profile of one rail
pub(super) async fn get_route(
    Path(name): Path<String>,
) -> Result<Json<RouteProfilePayload>, ServerError> {
    let route: RouteType = name.parse()?;
    Ok(Json(route.into()))
}

/// Metrics endpoint - plain-text counters and histogram summaries
pub(super) async fn metrics(State(state): State<AppState>) -> Result<Response, ServerError> {
    if !state.service.config().enable_metrics {
        return Err(ServerError::NotFound("metrics are disabled".to_string()));
    }

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.service.metrics().render_text(),
    )
        .into_response())
}

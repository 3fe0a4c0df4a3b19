//! Integration tests for REST API endpoints
//!
//! These tests build a real RoutingService and drive the router end-to-end.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use railroute_sdk::{to_query_string, RoutingInputs, RoutingService};
use railroute_server::api::create_router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_app() -> Router {
    let service = RoutingService::builder()
        .with_share_base_url("https://routing.example.com/")
        .log_decisions(false)
        .build()
        .unwrap();
    create_router(Arc::new(service))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_json(app: Router, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/route")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn step_names(json: &Value) -> Vec<String> {
    json["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["stepName"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get_json(create_test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_route_get_priority_case() {
    let inputs = RoutingInputs::new("LOCAL", "HKG", "HKD", "HSBCHKHHAXXX", 10_000.0, false);
    let uri = format!("/v1/route?{}", to_query_string(&inputs));

    let (status, json) = get_json(create_test_app(), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["route"], "FPS");
    assert_eq!(json["route_title"], "FPS (Faster Payment System)");
    assert_eq!(step_names(&json), vec!["1. Scope Check", "2. FPS"]);
    assert!(json["request_id"].as_str().unwrap().starts_with("req_"));
    assert_eq!(
        json["share_link"],
        format!("https://routing.example.com/?{}", to_query_string(&inputs))
    );
}

#[tokio::test]
async fn test_route_get_without_currency_uses_defaults() {
    let (status, json) = get_json(create_test_app(), "/v1/route?paymentMethod=WIRE").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["route"], "FPS");
    assert_eq!(
        json["share_link"],
        format!(
            "https://routing.example.com/?{}",
            to_query_string(&RoutingInputs::default())
        )
    );
}

#[tokio::test]
async fn test_route_get_without_query() {
    let (status, json) = get_json(create_test_app(), "/v1/route").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["route"], "FPS");
}

#[tokio::test]
async fn test_route_post_same_bank() {
    let body = json!({
        "paymentMethod": "LOCAL",
        "destinationCountry": "HKG",
        "currency": "USD",
        "beneficiarySwift": "DHBKHKHHXXX",
        "amount": 9000000,
        "isPOBO": false
    });

    let (status, json) = post_json(create_test_app(), body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["route"], "ACT");
    assert_eq!(json["steps"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_route_post_out_of_scope() {
    let body = json!({
        "paymentMethod": "WIRE",
        "destinationCountry": "USA",
        "currency": "GBP",
        "beneficiarySwift": "",
        "amount": 1000,
        "isPOBO": false
    });

    let (status, json) = post_json(create_test_app(), body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["route"], "TT");
    assert_eq!(step_names(&json), vec!["1. Scope Check"]);
    assert_eq!(json["steps"][0]["isMatch"], false);
}

#[tokio::test]
async fn test_route_post_partial_body_takes_defaults() {
    let (status, json) = post_json(create_test_app(), json!({"isPOBO": true}).to_string()).await;

    // Default HKG/HKD/HSBC inputs with POBO: FPS and ACT refuse, RTGS takes the POBO path
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["route"], "RTGS");
}

#[tokio::test]
async fn test_route_post_malformed_json() {
    let (status, json) = post_json(create_test_app(), "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
    assert!(json["error"].as_str().unwrap().contains("JSON syntax error"));
}

#[tokio::test]
async fn test_route_post_absorbs_malformed_fields() {
    let body = json!({
        "paymentMethod": null,
        "destinationCountry": "HKG",
        "currency": "HKD",
        "beneficiarySwift": "HSBCHKHHAXXX",
        "amount": "lots",
        "isPOBO": false
    });

    let (status, json) = post_json(create_test_app(), body.to_string()).await;

    // Blank method is in scope, unparsable amount is 0: plain HKD FPS payment
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["route"], "FPS");
    let link = json["share_link"].as_str().unwrap();
    assert!(link.contains("paymentMethod=&"));
    assert!(link.contains("amount=0&"));
}

#[tokio::test]
async fn test_route_post_non_object_body() {
    let (status, json) = post_json(create_test_app(), "\"HKD\"".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("Invalid routing inputs"));
}

#[tokio::test]
async fn test_route_post_missing_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/route")
        .body(Body::from("{}"))
        .unwrap();
    let (status, body) = send(create_test_app(), request).await;
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Content-Type"));
}

#[tokio::test]
async fn test_render_endpoint() {
    let inputs = RoutingInputs::new("SWIFT", "HKG", "USD", "HSBCHKHHAXXX", 1_000.0, true);
    let uri = format!("/v1/route/render?{}", to_query_string(&inputs));
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = create_test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.starts_with("Route: RTGS"));
    assert!(text.contains("[MATCH] 4. RTGS (CHATS)"));
    assert!(!text.contains("5. TT (Fallback)"));
}

#[tokio::test]
async fn test_list_routes() {
    let (status, json) = get_json(create_test_app(), "/v1/routes").await;

    assert_eq!(status, StatusCode::OK);
    let routes: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["route"].as_str().unwrap())
        .collect();
    assert_eq!(routes, vec!["FPS", "ACT", "RTGS", "TT"]);
}

#[tokio::test]
async fn test_get_route_profile() {
    let (status, json) = get_json(create_test_app(), "/v1/routes/ACT").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "ACT (Account Transfer)");
    assert_eq!(json["priority"], 1);
}

#[tokio::test]
async fn test_get_unknown_route_profile() {
    let (status, json) = get_json(create_test_app(), "/v1/routes/CHEQUE").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
    assert!(json["error"].as_str().unwrap().contains("CHEQUE"));
}

#[tokio::test]
async fn test_metrics_after_routing() {
    let service = Arc::new(RoutingService::builder().log_decisions(false).build().unwrap());
    let app = create_router(Arc::clone(&service));

    let (status, _) = get_json(app.clone(), "/v1/route").await;
    assert_eq!(status, StatusCode::OK);

    let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    let text = String::from_utf8(body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("evaluations.total 1"));
    assert!(text.contains("route.FPS 1"));
    assert!(text.contains("evaluation.duration.count 1"));
}

#[tokio::test]
async fn test_metrics_disabled() {
    let service = RoutingService::builder()
        .enable_metrics(false)
        .build()
        .unwrap();
    let app = create_router(Arc::new(service));

    let (status, json) = get_json(app, "/metrics").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
}

//! End-to-end integration tests for the cropcast HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! validator -> gateway client -> (stub) upstream -> HTTP response.
//!
//! Requests are sent with `tower::ServiceExt::oneshot` directly against the
//! router. Where a test needs an upstream, a stub axum server is bound to
//! an ephemeral local port and canned replies are served from it; no test
//! touches the real hosted space.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceExt;

use cropcast_gateway::GatewayConfig;
use cropcast_server::router::build_router;
use cropcast_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Starts a stub upstream answering `/run/predict_yield` with the given
/// first data element, and returns its base URL.
async fn spawn_stub_upstream(reply: &str) -> String {
    spawn_stub_with_body(json!({ "data": [reply] })).await
}

/// Starts a stub upstream answering with an arbitrary JSON body.
async fn spawn_stub_with_body(body: Value) -> String {
    let app = Router::new().route(
        "/run/predict_yield",
        post(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Builds the router under test, pointed at the given upstream.
fn test_app(upstream_url: &str) -> Router {
    let config = GatewayConfig {
        base_url: upstream_url.to_string(),
        hf_token: None,
        timeout: Duration::from_secs(5),
    };
    let state = AppState::new(config).expect("failed to create AppState");
    build_router(state)
}

/// Sends a POST request with a JSON body and returns (status, json).
async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

/// Sends a GET request and returns (status, json).
async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

fn valid_body() -> Value {
    json!({
        "district": "Cuttack",
        "crop": "Rice",
        "season": "Kharif",
        "year": 2024,
        "area": "2.5",
    })
}

// ---------------------------------------------------------------------------
// Method and validation errors (no upstream involved)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_post_on_predict_route_is_405_with_json_body() {
    let app = test_app("http://127.0.0.1:9");

    let (status, body) = get_json(&app, "/api/predict-yield").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "message": "Method Not Allowed" }));
}

#[tokio::test]
async fn missing_area_is_rejected_with_fixed_message() {
    let app = test_app("http://127.0.0.1:9");

    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("area");

    let (status, body) = post_json(&app, "/api/predict-yield", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Missing or invalid parameters. Please ensure all fields are filled correctly."
    );
}

#[tokio::test]
async fn non_numeric_year_is_rejected() {
    let app = test_app("http://127.0.0.1:9");

    let mut body = valid_body();
    body["year"] = json!("soon");

    let (status, body) = post_json(&app, "/api/predict-yield", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Missing or invalid parameters. Please ensure all fields are filled correctly."
    );
}

#[tokio::test]
async fn wrong_shaped_field_is_rejected_not_a_framework_error() {
    let app = test_app("http://127.0.0.1:9");

    let mut body = valid_body();
    body["year"] = json!(true);

    let (status, body) = post_json(&app, "/api/predict-yield", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Missing or invalid parameters. Please ensure all fields are filled correctly."
    );
}

// ---------------------------------------------------------------------------
// Full round trips against a stub upstream
// ---------------------------------------------------------------------------

#[tokio::test]
async fn successful_prediction_round_trip() {
    let upstream = spawn_stub_upstream("## 4.75 Tons per Hectare").await;
    let app = test_app(&upstream);

    let (status, body) = post_json(&app, "/api/predict-yield", valid_body()).await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {:?}", body);
    assert_eq!(
        body,
        json!({
            "predictedYield": 4.75,
            "message": "Prediction successful",
        })
    );
}

#[tokio::test]
async fn upstream_error_string_passes_through_verbatim_as_400() {
    let upstream = spawn_stub_upstream("Error: district not found").await;
    let app = test_app(&upstream);

    let (status, body) = post_json(&app, "/api/predict-yield", valid_body()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Error: district not found" }));
}

#[tokio::test]
async fn unparseable_upstream_reply_is_500_parse_failure() {
    let upstream = spawn_stub_upstream("no data").await;
    let app = test_app(&upstream);

    let (status, body) = post_json(&app, "/api/predict-yield", valid_body()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "message": "Could not parse yield from server response." })
    );
}

#[tokio::test]
async fn empty_upstream_data_is_internal_error_with_detail() {
    let upstream = spawn_stub_with_body(json!({ "data": [] })).await;
    let app = test_app(&upstream);

    let (status, body) = post_json(&app, "/api/predict-yield", valid_body()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal Server Error");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unreachable_upstream_is_internal_error() {
    // Nothing listens on this port; the connection fails outright.
    let app = test_app("http://127.0.0.1:9");

    let (status, body) = post_json(&app, "/api/predict-yield", valid_body()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal Server Error");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn slow_upstream_hits_the_bounded_timeout() {
    // The stub never answers within the deadline.
    let stub = Router::new().route(
        "/run/predict_yield",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "data": ["## 1.0 Tons per Hectare"] }))
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, stub).await.unwrap();
    });

    let config = GatewayConfig {
        base_url: format!("http://{}", addr),
        hf_token: None,
        timeout: Duration::from_millis(200),
    };
    let app = build_router(AppState::new(config).unwrap());

    let (status, body) = post_json(&app, "/api/predict-yield", valid_body()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal Server Error");
    assert_eq!(body["error"], "upstream request timed out");
}

// ---------------------------------------------------------------------------
// Catalog and health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn catalog_lists_districts_and_seasonal_crops() {
    let app = test_app("http://127.0.0.1:9");

    let (status, body) = get_json(&app, "/api/catalog").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["districts"].as_array().unwrap().len(), 30);
    assert!(body["districts"]
        .as_array()
        .unwrap()
        .contains(&json!("Cuttack")));

    let seasons = body["seasons"].as_array().unwrap();
    assert_eq!(seasons.len(), 3);
    let kharif = seasons
        .iter()
        .find(|s| s["name"] == "Kharif")
        .expect("Kharif season missing");
    assert!(kharif["crops"].as_array().unwrap().contains(&json!("Rice")));
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = test_app("http://127.0.0.1:9");

    let (status, body) = get_json(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

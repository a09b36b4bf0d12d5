//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use barchart_api::config::ServiceConfig;
use barchart_api::state::AppState;

/// Footer link used across all integration tests.
pub const SOURCE_URL: &str = "https://example.com/barchart";

/// Build the full app router with a fixed test configuration.
pub fn build_test_app() -> Router {
    let config = ServiceConfig {
        source_url: SOURCE_URL.to_owned(),
        ..ServiceConfig::default()
    };
    barchart_api::app(AppState::new(Arc::new(config)))
}

/// Send a GET request and return status, headers and body text.
pub async fn get_text(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(body_bytes.to_vec()).unwrap();

    (status, headers, text)
}

/// Send a GET request and return the JSON response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, text) = get_text(app, uri).await;
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

//! End-to-end API tests
//!
//! Every test composes the full application router over its own temp-dir
//! storage, so tests are independent and need no external services.

mod common;
mod flows;
mod videos;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use tower::ServiceExt;

use crate::common::{body_bytes, get_request, TestApp};

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await.unwrap();

    let resp = app.router().oneshot(get_request("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, b"OK");
}

#[tokio::test]
async fn test_root_banner() {
    let app = TestApp::new().await.unwrap();

    let resp = app.router().oneshot(get_request("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_startup_creates_storage_directories() {
    let app = TestApp::new().await.unwrap();

    assert!(app.config.video_dir.is_dir());
    assert!(app.config.flows_dir.is_dir());
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin_with_credentials() {
    let app = TestApp::new().await.unwrap();

    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/list_flows")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();

    let resp = app.router().oneshot(req).await.unwrap();

    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

#[tokio::test]
async fn test_cors_does_not_echo_other_origins() {
    let app = TestApp::new().await.unwrap();

    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/list_flows")
        .header(header::ORIGIN, "http://evil.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();

    let resp = app.router().oneshot(req).await.unwrap();

    assert!(resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

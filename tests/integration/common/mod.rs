//! Common test utilities and fixtures for integration tests
//!
//! Provides a `TestApp` that composes the full application router over
//! temp-dir-backed storage, plus multipart request builders and response
//! body helpers shared by all test modules.

use anyhow::Result;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;

use flowreel_common::Config;

/// Boundary used by every multipart request built in tests
pub const BOUNDARY: &str = "flowreel-test-boundary";

/// Test application: full router over private temp-dir storage
pub struct TestApp {
    pub config: Config,
    router: Router,
    _storage: TempDir,
}

impl TestApp {
    /// Create a new test application with fresh storage directories
    pub async fn new() -> Result<Self> {
        let storage = tempfile::tempdir()?;

        let config = Config {
            frontend_url: "http://localhost:3000".to_string(),
            backend_url: "http://localhost:8000".to_string(),
            video_dir: storage.path().join("videos"),
            flows_dir: storage.path().join("flows"),
            port: 0,
        };

        let router = flowreel_app::create_app(&config).await?;

        Ok(TestApp {
            config,
            router,
            _storage: storage,
        })
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// One part of a multipart form body
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a [u8]),
}

/// Build a multipart/form-data body from parts, in the given order
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; \
                         filename=\"upload.bin\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Build a multipart POST request
pub fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

/// Build an upload request for a `(flow, node)` recording
pub fn upload_video_request(flow_id: &str, node_id: &str, bytes: &[u8]) -> Request<Body> {
    multipart_request(
        "/upload_video/",
        &[
            Part::Text("flow_id", flow_id),
            Part::Text("node_id", node_id),
            Part::File("file", bytes),
        ],
    )
}

/// Build a save-flow request carrying the given JSON bytes
pub fn save_flow_request(flow_id: &str, json: &str) -> Request<Body> {
    multipart_request(
        &format!("/save_flow/{flow_id}"),
        &[Part::File("file", json.as_bytes())],
    )
}

/// Build a plain GET request
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read a response body to raw bytes
pub async fn body_bytes(response: axum::http::Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Parse a response body as JSON Value
pub async fn parse_body(response: axum::http::Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

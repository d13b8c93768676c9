//! Route definitions for the Flows domain API

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use super::handlers::{flows, videos};
use super::middleware::FlowsState;

/// Create all Flows domain API routes.
///
/// Recording payloads are unbounded, so the default body limit is lifted;
/// uploads are spooled to disk rather than held in memory.
pub fn routes() -> Router<FlowsState> {
    Router::new()
        .route("/upload_video/", post(videos::upload_video))
        .route("/save_flow/{flow_id}", post(flows::save_flow))
        .route("/load_flow/{flow_id}", get(flows::load_flow))
        .route("/list_flows", get(flows::list_flows))
        .layer(DefaultBodyLimit::disable())
}

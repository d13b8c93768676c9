//! Flowreel application composition root
//!
//! Composes the Flows domain router, the static video service, and the
//! config-driven CORS policy into a single application.

use axum::{http::HeaderValue, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;

use flowreel_common::Config;
use flowreel_flows::{FlowsRepositories, FlowsState};

/// Create the main application router with all routes and middleware
pub async fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    // Create repositories rooted at the configured storage directories
    let repos = FlowsRepositories::new(&config.flows_dir, &config.video_dir);
    repos.ensure_dirs().await?;

    // Create Flows domain state
    let flows_state = FlowsState {
        repos,
        public_base_url: config.backend_url.clone(),
    };

    // Build router: domain routes, static recordings, infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Flowreel API v0.1.0" }))
        .merge(flowreel_flows::routes().with_state(flows_state))
        .nest_service("/videos", ServeDir::new(&config.video_dir))
        .layer(cors_layer(config)?);

    Ok(app)
}

/// Build the CORS layer from config.
///
/// Only the configured frontend origin is allowed, with credentials.
/// Methods and headers are mirrored, which is the credentials-compatible
/// equivalent of allowing everything from that origin.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let origin: HeaderValue = config.frontend_url.parse().map_err(|_| {
        anyhow::anyhow!("FRONTEND_URL is not a valid origin: {}", config.frontend_url)
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

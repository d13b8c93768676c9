//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Origin allowed to call the API (the flow editor frontend)
    pub frontend_url: String,

    /// Public base URL of this service, used to build returned video links
    pub backend_url: String,

    /// Directory holding uploaded node recordings
    pub video_dir: PathBuf,

    /// Directory holding saved flow documents
    pub flows_dir: PathBuf,

    /// Runtime configuration
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),

            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),

            video_dir: env::var("VIDEO_DIR")
                .unwrap_or_else(|_| "videos".to_string())
                .into(),
            flows_dir: env::var("FLOWS_DIR")
                .unwrap_or_else(|_| "flows".to_string())
                .into(),

            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
        };

        Ok(config)
    }
}

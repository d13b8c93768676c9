//! Flows domain state

use crate::FlowsRepositories;

/// Application state for the Flows domain
#[derive(Clone)]
pub struct FlowsState {
    pub repos: FlowsRepositories,
    /// Public base URL of the service, used to build returned video links
    pub public_base_url: String,
}

impl FlowsState {
    /// Public URL under which a stored video file is served
    pub fn video_url(&self, filename: &str) -> String {
        format!(
            "{}/videos/{}",
            self.public_base_url.trim_end_matches('/'),
            filename
        )
    }
}

//! Repository implementations for the Flows domain

pub mod flows;
pub mod videos;

use std::path::Path;

use flowreel_common::Result;

pub use flows::FlowRepository;
pub use videos::{VideoRepository, VideoSpool};

/// Combined repository access for the Flows domain
#[derive(Clone)]
pub struct FlowsRepositories {
    pub flows: FlowRepository,
    pub videos: VideoRepository,
}

impl FlowsRepositories {
    pub fn new(flows_dir: impl AsRef<Path>, video_dir: impl AsRef<Path>) -> Self {
        Self {
            flows: FlowRepository::new(flows_dir.as_ref()),
            videos: VideoRepository::new(video_dir.as_ref()),
        }
    }

    /// Create both storage directories if absent.
    pub async fn ensure_dirs(&self) -> Result<()> {
        tokio::fs::create_dir_all(self.flows.root()).await?;
        tokio::fs::create_dir_all(self.videos.root()).await?;
        Ok(())
    }
}

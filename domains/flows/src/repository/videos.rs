//! Node recording repository
//!
//! Recordings live as `{flow_id}_{node_id}.webm` files directly in the
//! configured video directory. Uploads are streamed into a uniquely named
//! spool file and renamed over the target on commit, so the final name only
//! ever points at a complete recording and re-uploads overwrite silently.

use std::path::{Path, PathBuf};

use flowreel_common::Result;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct VideoRepository {
    root: PathBuf,
}

impl VideoRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Open a spool file for an incoming upload.
    ///
    /// The payload can be streamed in before the final filename is known;
    /// nothing is visible under a recording name until
    /// [`VideoSpool::commit`].
    pub async fn spool(&self) -> Result<VideoSpool> {
        let path = self
            .root
            .join(format!(".upload.{}.tmp", Uuid::new_v4().simple()));
        let file = tokio::fs::File::create(&path).await?;

        Ok(VideoSpool {
            file,
            path,
            root: self.root.clone(),
            committed: false,
        })
    }
}

/// In-progress upload, spooled to disk chunk by chunk.
///
/// Dropping an uncommitted spool removes its temp file.
#[derive(Debug)]
pub struct VideoSpool {
    file: tokio::fs::File,
    path: PathBuf,
    root: PathBuf,
    committed: bool,
}

impl VideoSpool {
    pub async fn write_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        self.file.write_all(chunk).await?;
        Ok(())
    }

    /// Atomically publish the spooled payload under its recording name,
    /// overwriting any prior recording with the same name.
    pub async fn commit(mut self, filename: &str) -> Result<PathBuf> {
        self.file.flush().await?;

        let target = self.root.join(filename);
        tokio::fs::rename(&self.path, &target).await?;
        self.committed = true;

        tracing::debug!(filename, "Recording committed");
        Ok(target)
    }
}

impl Drop for VideoSpool {
    fn drop(&mut self) {
        if !self.committed {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

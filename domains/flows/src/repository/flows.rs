//! Flow document repository
//!
//! Flow documents live as `{flow_id}.json` files directly in the configured
//! flows directory. The directory is the sole source of truth; there is no
//! index or cache. Writes go to a uniquely named temp file in the same
//! directory and are renamed over the target, so a concurrent reader sees
//! either the old or the new document, never a partial one.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use flowreel_common::{Error, Result};
use uuid::Uuid;

use crate::domain::FlowId;

#[derive(Debug, Clone)]
pub struct FlowRepository {
    root: PathBuf,
}

impl FlowRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, flow_id: &FlowId) -> PathBuf {
        self.root.join(flow_id.document_filename())
    }

    /// Persist a flow document, overwriting any prior content (last write
    /// wins). The bytes are stored verbatim as submitted.
    pub async fn save(&self, flow_id: &FlowId, bytes: &[u8]) -> Result<()> {
        let target = self.document_path(flow_id);
        let tmp = self.root.join(format!(
            ".{}.{}.tmp",
            flow_id.document_filename(),
            Uuid::new_v4().simple()
        ));

        tokio::fs::write(&tmp, bytes).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &target).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        tracing::debug!(flow_id = %flow_id, bytes = bytes.len(), "Flow document saved");
        Ok(())
    }

    /// Load and parse a flow document.
    ///
    /// Returns `Ok(None)` when no document exists for the identifier. A
    /// document that exists but cannot be parsed surfaces as
    /// [`Error::CorruptDocument`].
    pub async fn load(&self, flow_id: &FlowId) -> Result<Option<serde_json::Value>> {
        let path = self.document_path(flow_id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let document = serde_json::from_slice(&bytes)
            .map_err(|e| Error::CorruptDocument(format!("{flow_id}: {e}")))?;
        Ok(Some(document))
    }

    /// Enumerate the identifiers of all stored flow documents.
    ///
    /// Non-recursive; order is whatever the filesystem yields. Temp files
    /// never match the `.json` extension filter.
    pub async fn list(&self) -> Result<Vec<String>> {
        let mut flow_ids = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.root).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                flow_ids.push(stem.to_string());
            }
        }

        Ok(flow_ids)
    }
}

//! Node recording upload API handler

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use flowreel_common::{Error, Result};

use crate::api::middleware::FlowsState;
use crate::domain::{recording_filename, FlowId, NodeId};

/// Response returned after a successful recording upload
#[derive(Debug, Serialize)]
pub struct UploadVideoResponse {
    pub message: &'static str,
    #[serde(rename = "videoUrl")]
    pub video_url: String,
}

/// Upload a recording for a `(flow, node)` pair.
///
/// Multipart fields: `flow_id` and `node_id` (text) and `file` (binary).
/// The payload is streamed to a spool file as it arrives, so field order
/// does not matter and the body is never buffered in memory. The spool is
/// only published under its recording name once all fields have been read
/// and validated; an early failure drops the spool and its temp file.
pub async fn upload_video(
    State(state): State<FlowsState>,
    mut multipart: Multipart,
) -> Result<Json<UploadVideoResponse>> {
    let mut flow_id = None;
    let mut node_id = None;
    let mut spool = None;

    while let Some(mut field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "flow_id" => flow_id = Some(field.text().await?),
            "node_id" => node_id = Some(field.text().await?),
            "file" => {
                let mut incoming = state.repos.videos.spool().await?;
                while let Some(chunk) = field.chunk().await? {
                    incoming.write_chunk(&chunk).await?;
                }
                spool = Some(incoming);
            }
            _ => {}
        }
    }

    let flow_id = flow_id
        .ok_or_else(|| Error::Validation("Missing multipart field: flow_id".to_string()))?;
    let node_id = node_id
        .ok_or_else(|| Error::Validation("Missing multipart field: node_id".to_string()))?;
    let spool =
        spool.ok_or_else(|| Error::Validation("Missing multipart field: file".to_string()))?;

    let flow_id = FlowId::parse(&flow_id)?;
    let node_id = NodeId::parse(&node_id)?;

    let filename = recording_filename(&flow_id, &node_id);
    spool.commit(&filename).await?;

    tracing::info!(flow_id = %flow_id, node_id = %node_id, "Recording uploaded");
    Ok(Json(UploadVideoResponse {
        message: "Upload successful",
        video_url: state.video_url(&filename),
    }))
}

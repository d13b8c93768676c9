//! Flow document API handlers

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Serialize;

use flowreel_common::{Error, Result};

use crate::api::middleware::FlowsState;
use crate::domain::FlowId;

/// Acknowledgement returned after saving a flow document
#[derive(Debug, Serialize)]
pub struct SaveFlowResponse {
    pub message: &'static str,
    pub flow_id: FlowId,
}

/// Save (create or overwrite) a flow document.
///
/// The payload arrives as a multipart `file` field containing JSON bytes.
/// Malformed JSON is rejected up front; the accepted bytes are stored
/// verbatim.
pub async fn save_flow(
    State(state): State<FlowsState>,
    Path(flow_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<SaveFlowResponse>> {
    let flow_id = FlowId::parse(&flow_id)?;

    let mut payload = None;
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            payload = Some(field.bytes().await?);
        }
    }

    let payload =
        payload.ok_or_else(|| Error::Validation("Missing multipart field: file".to_string()))?;
    serde_json::from_slice::<serde_json::Value>(&payload)
        .map_err(|e| Error::Validation(format!("Flow document is not valid JSON: {e}")))?;

    state.repos.flows.save(&flow_id, &payload).await?;

    tracing::info!(flow_id = %flow_id, "Flow saved");
    Ok(Json(SaveFlowResponse {
        message: "Flow saved",
        flow_id,
    }))
}

/// Load a flow document by identifier.
pub async fn load_flow(
    State(state): State<FlowsState>,
    Path(flow_id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let flow_id = FlowId::parse(&flow_id)?;

    let document = state
        .repos
        .flows
        .load(&flow_id)
        .await?
        .ok_or_else(|| Error::NotFound("Flow not found".to_string()))?;

    Ok(Json(document))
}

/// Enumerate the identifiers of all stored flows.
pub async fn list_flows(State(state): State<FlowsState>) -> Result<Json<Vec<String>>> {
    let flow_ids = state.repos.flows.list().await?;
    Ok(Json(flow_ids))
}

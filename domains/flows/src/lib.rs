//! Flows domain: flow documents and per-node screen recordings
//!
//! The filesystem is the sole source of truth: flow documents are
//! `{flow_id}.json` files, recordings are `{flow_id}_{node_id}.webm` files,
//! and both identifiers are validated before any path is derived.

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::{recording_filename, FlowId, NodeId};

// Re-export repository types
pub use repository::{FlowRepository, FlowsRepositories, VideoRepository, VideoSpool};

// Re-export API types
pub use api::routes;
pub use api::FlowsState;

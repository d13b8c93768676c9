//! Domain layer for the Flows domain

pub mod entities;

pub use entities::{recording_filename, FlowId, NodeId, MAX_IDENTIFIER_LEN};

//! Domain entities for the Flows domain
//!
//! Flow documents and node recordings are addressed purely by filename, so
//! the identifier types here are the single validation point: every path the
//! repositories touch is derived from an already-validated `FlowId` or
//! `NodeId`.

use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use flowreel_common::{Error, Result};

/// Regex for validating externally supplied identifiers (compiled once).
/// Leading alphanumeric keeps dot-files and `..` out of the namespace;
/// the rest of the allow-list excludes path separators entirely.
static IDENTIFIER_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("identifier regex is valid")
});

/// Maximum identifier length in bytes
pub const MAX_IDENTIFIER_LEN: usize = 128;

fn validate_identifier(kind: &str, raw: &str) -> Result<()> {
    if raw.is_empty() {
        return Err(Error::Validation(format!("{kind} must not be empty")));
    }
    if raw.len() > MAX_IDENTIFIER_LEN {
        return Err(Error::Validation(format!(
            "{kind} exceeds {MAX_IDENTIFIER_LEN} bytes"
        )));
    }
    if !IDENTIFIER_REGEX.is_match(raw) {
        return Err(Error::Validation(format!(
            "{kind} contains characters outside [A-Za-z0-9._-]: {raw:?}"
        )));
    }
    Ok(())
}

/// Validated flow identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FlowId(String);

impl FlowId {
    pub fn parse(raw: &str) -> Result<Self> {
        validate_identifier("flow_id", raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Storage name of the flow document for this identifier
    pub fn document_filename(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl fmt::Display for FlowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated node identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn parse(raw: &str) -> Result<Self> {
        validate_identifier("node_id", raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage name of the recording for a `(flow, node)` pair.
///
/// This is the only addressing mechanism for videos; there is no separate
/// ID or metadata record.
pub fn recording_filename(flow_id: &FlowId, node_id: &NodeId) -> String {
    format!("{flow_id}_{node_id}.webm")
}

//! Correlation types for request tracking
//!
//! Every reconciliation carries a `RequestId` so that the start/end events of
//! one assertion can be grouped even when several specs log into the same
//! stream.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single reconciliation request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new time-ordered RequestId (UUIDv7)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string, e.g. one handed over by runner glue
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Context carried through a reconciliation for log correlation
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
}

impl RequestContext {
    /// Create a new context with a fresh RequestId
    pub fn new() -> Self {
        Self {
            request_id: RequestId::new(),
        }
    }

    /// Create a context around an existing RequestId
    pub fn with_request_id(request_id: RequestId) -> Self {
        Self { request_id }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

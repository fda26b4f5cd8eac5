//! Canonical schema constants for structured logging
//!
//! These constants keep field keys and event names identical across the
//! core, store, engine and CLI crates.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Snapshot identifiers
pub const FIELD_SPEC: &str = "spec";
pub const FIELD_NAME: &str = "name";
pub const FIELD_SNAPSHOT: &str = "snapshot";
pub const FIELD_UPDATE_MODE: &str = "update_mode";

// Outcome fields
pub const FIELD_TRANSITION: &str = "transition";
pub const FIELD_IMAGES_MATCH: &str = "images_match";
pub const FIELD_SNAPSHOT_UPDATED: &str = "snapshot_updated";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Reconciliation transitions, logged under FIELD_TRANSITION
pub const TRANSITION_ADOPT: &str = "adopt";
pub const TRANSITION_MATCH: &str = "match";
pub const TRANSITION_MISMATCH: &str = "mismatch";
pub const TRANSITION_UPDATE: &str = "update";

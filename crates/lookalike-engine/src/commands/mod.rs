//! Command orchestration layer.
//!
//! Functions here coordinate core domain logic with the snapshot store.

pub mod engine_command;
pub mod reconcile;

//! Lookalike Engine - reconciliation orchestration
//!
//! Coordinates the core domain (options, policy, identity) with the snapshot
//! store and an `ImageComparator`, and exposes the engine command boundary.

pub mod commands;

pub use commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult, EngineContext, ReconcileRequest,
};
pub use commands::reconcile::{reconcile, ReconcileOptions};

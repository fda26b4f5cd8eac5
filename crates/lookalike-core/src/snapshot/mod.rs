//! Snapshot domain model.
//!
//! ## Responsibilities
//!
//! - Validate snapshot identities and derive the `"<spec> - <name>"` stem
//! - Derive baseline/actual/diff file paths inside a snapshot directory
//! - Define the reconciliation result and its outcome invariants
//!
//! ## Non-Responsibilities
//!
//! - Filesystem mutations (handled by `lookalike-store`)
//! - Orchestration (handled by `lookalike-engine`)

pub mod identity;
pub mod paths;
pub mod result;

pub use identity::SnapshotIdentity;
pub use paths::SnapshotPaths;
pub use result::{ReconciliationResult, Transition};

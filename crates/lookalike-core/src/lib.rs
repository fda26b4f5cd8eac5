//! Lookalike Core - snapshot reconciliation domain
//!
//! This crate provides the pure building blocks of visual snapshot testing:
//! - Match options with explicit layered resolution and validation
//! - The diff policy builder (sparse comparator configuration)
//! - Snapshot identity, file layout and reconciliation results
//! - The `ImageComparator` capability trait
//! - Project settings (TOML + environment)
//! - Structured error and logging facilities
//!
//! Filesystem mutations live in `lookalike-store`; the reconcile workflow in
//! `lookalike-engine`.

pub mod comparator;
pub mod diff_policy;
pub mod errors;
pub mod logging_facility;
pub mod options;
pub mod settings;
pub mod snapshot;

pub use lookalike_core_types::schema;

// Re-export commonly used types
pub use comparator::{DiffRequest, ExactComparator, ImageComparator};
pub use diff_policy::DiffPolicy;
pub use errors::{LkError, LkErrorKind, Result, SnapshotError};
pub use options::MatchOptions;
pub use settings::Settings;
pub use snapshot::{ReconciliationResult, SnapshotIdentity, SnapshotPaths, Transition};

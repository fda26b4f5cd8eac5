//! Lookalike Store - on-disk snapshot lifecycle
//!
//! Provides:
//! - Mirrored baseline directory layout (`SnapshotLayout`)
//! - Idempotent filesystem primitives with temp→rename writes (`fs`)
//! - Per-transition snapshot directory mutations (`SnapshotStore`)

pub mod errors;
pub mod fs;
pub mod layout;
pub mod snapshot_store;

// Re-export key types
pub use errors::Result;
pub use layout::SnapshotLayout;
pub use snapshot_store::SnapshotStore;

//! Filesystem primitives
//!
//! Every primitive is idempotent from the caller's point of view:
//! - creating an existing directory succeeds
//! - removing a missing file succeeds
//! - moving onto an existing file replaces it
//! - writes go through temp→rename so readers never see half a file

mod atomic;
mod ops;

pub use atomic::write_via_temp;
pub use ops::{absolute, ensure_dir, move_file, normalize_lexically, remove_if_exists};

use crate::snapshot::identity::{SnapshotIdentity, SEPARATORS};
use std::path::{Path, PathBuf};

pub const SNAPSHOT_EXTENSION: &str = "png";
pub const ACTUAL_EXTENSION: &str = "actual.png";
pub const DIFF_EXTENSION: &str = "diff.png";

/// The three files a reconciliation can touch for one identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotPaths {
    /// Approved baseline image
    pub snapshot: PathBuf,
    /// Captured screenshot kept after a mismatch
    pub actual: PathBuf,
    /// Rendered difference kept after a mismatch
    pub diff: PathBuf,
}

impl SnapshotPaths {
    /// Derive the paths for `identity` inside `dir`
    ///
    /// For identity `{spec: "login", name: "form"}` this yields
    /// `login - form.png`, `login - form.actual.png` and `login - form.diff.png`.
    /// Separators in the stem nest the files below `dir`; empty segments are
    /// dropped so a leading `/` never escapes it.
    pub fn in_dir(dir: &Path, identity: &SnapshotIdentity) -> Self {
        let stem = identity.stem();
        let mut segments: Vec<&str> = stem.split(SEPARATORS).filter(|s| !s.is_empty()).collect();
        let file = segments.pop().unwrap_or(stem.as_str());

        let mut parent = dir.to_path_buf();
        parent.extend(segments);

        Self {
            snapshot: parent.join(format!("{}.{}", file, SNAPSHOT_EXTENSION)),
            actual: parent.join(format!("{}.{}", file, ACTUAL_EXTENSION)),
            diff: parent.join(format!("{}.{}", file, DIFF_EXTENSION)),
        }
    }

    /// Directory holding all three files
    pub fn dir(&self) -> &Path {
        self.snapshot.parent().unwrap_or_else(|| Path::new(""))
    }
}

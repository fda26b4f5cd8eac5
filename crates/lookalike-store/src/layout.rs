//! Snapshot directory layout
//!
//! Baselines mirror the directory structure of the screenshots tree: a
//! screenshot at `<screenshots>/auth/login.cy.ts/shot.png` reconciles against
//! baselines in `<snapshots>/auth/login.cy.ts/`.

#![allow(clippy::result_large_err)]

use crate::errors::Result;
use crate::fs::absolute;
use lookalike_core::errors::SnapshotError;
use lookalike_core::{SnapshotIdentity, SnapshotPaths};
use std::path::{Path, PathBuf};

/// The baseline-root / screenshots-root pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotLayout {
    snapshots_root: PathBuf,
    screenshots_root: PathBuf,
}

impl SnapshotLayout {
    pub fn new(snapshots_root: impl Into<PathBuf>, screenshots_root: impl Into<PathBuf>) -> Self {
        Self {
            snapshots_root: snapshots_root.into(),
            screenshots_root: screenshots_root.into(),
        }
    }

    pub fn snapshots_root(&self) -> &Path {
        &self.snapshots_root
    }

    pub fn screenshots_root(&self) -> &Path {
        &self.screenshots_root
    }

    /// Directory that holds the baseline for a screenshot at `screenshot`
    ///
    /// # Errors
    ///
    /// `UnresolvableIdentity` when `screenshot` is not inside the screenshots
    /// root (after resolving both against the working directory).
    pub fn snapshot_dir_for(&self, screenshot: &Path) -> Result<PathBuf> {
        let root = absolute(&self.screenshots_root)?;
        let shot = absolute(screenshot)?;

        let relative = shot
            .strip_prefix(&root)
            .map_err(|_| SnapshotError::OutsideScreenshotsRoot {
                path: screenshot.to_path_buf(),
                root: self.screenshots_root.clone(),
            })?;

        Ok(match relative.parent() {
            Some(sub) if !sub.as_os_str().is_empty() => self.snapshots_root.join(sub),
            _ => self.snapshots_root.clone(),
        })
    }

    /// Baseline, actual and diff paths for `identity` captured at `screenshot`
    pub fn paths_for(&self, identity: &SnapshotIdentity, screenshot: &Path) -> Result<SnapshotPaths> {
        let dir = self.snapshot_dir_for(screenshot)?;
        Ok(SnapshotPaths::in_dir(&dir, identity))
    }
}

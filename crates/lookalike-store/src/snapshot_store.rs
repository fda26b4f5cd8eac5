//! Filesystem transitions of a snapshot directory
//!
//! Each method performs one state-machine transition and leaves the
//! directory holding either the baseline alone or the baseline plus an
//! actual/diff pair. No locking: one writer per identity.

#![allow(clippy::result_large_err)]

use crate::errors::{screenshot_missing, Result};
use crate::fs::{ensure_dir, move_file, remove_if_exists, write_via_temp};
use crate::layout::SnapshotLayout;
use lookalike_core::errors::LkError;
use lookalike_core::{SnapshotIdentity, SnapshotPaths};
use std::path::Path;

/// Owner of the on-disk snapshot tree
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    layout: SnapshotLayout,
}

impl SnapshotStore {
    pub fn new(layout: SnapshotLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &SnapshotLayout {
        &self.layout
    }

    /// Resolve the three artifact paths for an identity
    pub fn locate(&self, identity: &SnapshotIdentity, screenshot: &Path) -> Result<SnapshotPaths> {
        self.layout.paths_for(identity, screenshot)
    }

    /// Fail unless the captured screenshot is a regular file
    pub fn require_screenshot(&self, screenshot: &Path) -> Result<()> {
        if screenshot.is_file() {
            Ok(())
        } else {
            Err(screenshot_missing(screenshot))
        }
    }

    pub fn baseline_exists(&self, paths: &SnapshotPaths) -> bool {
        paths.snapshot.is_file()
    }

    /// Promote the screenshot to baseline and clear stale artifacts
    pub fn adopt(&self, paths: &SnapshotPaths, screenshot: &Path) -> Result<()> {
        ensure_dir(paths.dir())?;
        move_file(screenshot, &paths.snapshot)?;
        self.clear_artifacts(paths)?;
        tracing::debug!(snapshot = %paths.snapshot.display(), "baseline adopted");
        Ok(())
    }

    /// Drop the screenshot after a match, together with stale artifacts
    pub fn discard(&self, paths: &SnapshotPaths, screenshot: &Path) -> Result<()> {
        remove_if_exists(screenshot)?;
        self.clear_artifacts(paths)
    }

    /// Keep a mismatch for inspection: render the diff, then move the
    /// screenshot next to the baseline as the actual image
    ///
    /// `render` receives a temporary path to write the diff image to; it is
    /// renamed onto the diff path only once rendering succeeded. The baseline
    /// itself is never touched.
    pub fn keep_mismatch<F>(&self, paths: &SnapshotPaths, screenshot: &Path, render: F) -> Result<()>
    where
        F: FnOnce(&Path) -> std::result::Result<(), LkError>,
    {
        ensure_dir(paths.dir())?;
        write_via_temp(&paths.diff, render)?;
        move_file(screenshot, &paths.actual)?;
        tracing::debug!(
            actual = %paths.actual.display(),
            diff = %paths.diff.display(),
            "mismatch artifacts written"
        );
        Ok(())
    }

    fn clear_artifacts(&self, paths: &SnapshotPaths) -> Result<()> {
        remove_if_exists(&paths.actual)?;
        remove_if_exists(&paths.diff)?;
        Ok(())
    }
}

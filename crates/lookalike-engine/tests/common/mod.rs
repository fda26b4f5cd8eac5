// Shared fixtures for engine integration tests

#![allow(dead_code)]

use lookalike_core::errors::{LkError, LkErrorKind};
use lookalike_core::{DiffPolicy, DiffRequest, ImageComparator};
use lookalike_store::{SnapshotLayout, SnapshotStore};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

pub const DIFF_BYTES: &[u8] = b"rendered-diff";

/// What the scripted comparator answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Equal,
    Different,
    Fail,
}

/// Comparator with a fixed verdict that records every policy it was handed
pub struct ScriptedComparator {
    verdict: Verdict,
    pub compared: Mutex<Vec<DiffPolicy>>,
    pub rendered: Mutex<Vec<DiffPolicy>>,
}

impl ScriptedComparator {
    pub fn new(verdict: Verdict) -> Self {
        Self {
            verdict,
            compared: Mutex::new(Vec::new()),
            rendered: Mutex::new(Vec::new()),
        }
    }

    pub fn compare_calls(&self) -> usize {
        self.compared.lock().unwrap().len()
    }

    pub fn last_rendered(&self) -> Option<DiffPolicy> {
        self.rendered.lock().unwrap().last().cloned()
    }
}

impl ImageComparator for ScriptedComparator {
    fn images_equal(
        &self,
        _reference: &Path,
        _current: &Path,
        policy: &DiffPolicy,
    ) -> Result<bool, LkError> {
        self.compared.lock().unwrap().push(policy.clone());
        match self.verdict {
            Verdict::Equal => Ok(true),
            Verdict::Different => Ok(false),
            Verdict::Fail => Err(LkError::new(LkErrorKind::Comparison)
                .with_op("images_equal")
                .with_message("corrupt image")),
        }
    }

    fn render_diff(&self, request: &DiffRequest<'_>) -> Result<(), LkError> {
        self.rendered.lock().unwrap().push(request.policy.clone());
        fs::write(request.diff, DIFF_BYTES).map_err(|e| {
            LkError::new(LkErrorKind::Io)
                .with_path(request.diff)
                .with_message(e.to_string())
        })
    }
}

/// A scratch project with `screenshots/` and `snapshots/` roots
pub struct Project {
    pub dir: TempDir,
    pub store: SnapshotStore,
}

impl Project {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp project directory");
        let store = SnapshotStore::new(SnapshotLayout::new(
            dir.path().join("snapshots"),
            dir.path().join("screenshots"),
        ));
        Self { dir, store }
    }

    /// Write a screenshot below the screenshots root, as a capture step would
    pub fn capture(&self, rel: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join("screenshots").join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, bytes).unwrap();
        path
    }

    /// Place a baseline directly, bypassing reconciliation
    pub fn seed_baseline(&self, rel_dir: &str, stem: &str, bytes: &[u8]) -> PathBuf {
        let dir = self.dir.path().join("snapshots").join(rel_dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("{}.png", stem));
        fs::write(&path, bytes).unwrap();
        path
    }

    /// Every file below the snapshots root, sorted, relative to it
    pub fn snapshot_files(&self) -> Vec<String> {
        let root = self.dir.path().join("snapshots");
        let mut out = Vec::new();
        collect(&root, &root, &mut out);
        out.sort();
        out
    }
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(root, &path, out);
        } else {
            out.push(
                path.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/"),
            );
        }
    }
}

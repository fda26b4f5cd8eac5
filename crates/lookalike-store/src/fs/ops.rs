#![allow(clippy::result_large_err)]

use crate::errors::{io_error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Create `dir` and all missing parents
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| io_error("ensure_dir", dir, e))
}

/// Remove a file; a file that is already gone counts as removed
///
/// Returns whether something was actually deleted.
pub fn remove_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed artifact");
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(io_error("remove_file", path, e)),
    }
}

/// Move `from` onto `to`, replacing `to` if it exists
///
/// Falls back to copy + remove when a plain rename is refused, which happens
/// when the screenshots and snapshots trees live on different filesystems.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(io_error("move_file", from, e)),
        Err(rename_err) => {
            fs::copy(from, to).map_err(|_| io_error("move_file", from, rename_err))?;
            fs::remove_file(from).map_err(|e| io_error("move_file", from, e))
        }
    }
}

/// Resolve `path` against the working directory without touching the
/// filesystem, and with `.`/`..` folded away
pub fn absolute(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| io_error("current_dir", path, e))?
            .join(path)
    };
    Ok(normalize_lexically(&joined))
}

/// Fold `.` and `..` components; `..` at the root is dropped
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

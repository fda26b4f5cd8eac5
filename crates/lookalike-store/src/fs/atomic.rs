//! Atomic write primitive
//!
//! Uses temp→rename so a crash mid-write leaves at most a stale `.tmp` file,
//! never a truncated image at the target path.

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, Result};
use lookalike_core::errors::LkError;
use std::fs;
use std::path::{Path, PathBuf};

/// Temp sibling for `target`: same directory, `.tmp` appended to the file name
fn temp_path_for(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    target.with_file_name(name)
}

/// Produce `target` by letting `write` fill a temp file, then renaming it
///
/// The parent directory is created if needed. If `write` fails, the temp
/// file is removed and the error is returned unchanged; `target` is untouched.
pub fn write_via_temp<F>(target: &Path, write: F) -> Result<()>
where
    F: FnOnce(&Path) -> std::result::Result<(), LkError>,
{
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_dir", parent, e))?;
        }
    }

    let temp_path = temp_path_for(target);

    if let Err(err) = write(&temp_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    fs::rename(&temp_path, target).map_err(|e| io_error("rename_temp", target, e))?;

    Ok(())
}

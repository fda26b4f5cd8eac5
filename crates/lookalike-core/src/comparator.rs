//! Comparison capability interface.
//!
//! The perceptual comparison algorithm lives outside the core; the reconciler
//! only needs "are these equal under this policy" and "draw me the diff".

use crate::diff_policy::DiffPolicy;
use crate::errors::{LkError, LkErrorKind};
use std::path::Path;

/// Inputs for rendering a diff image
#[derive(Debug, Clone, Copy)]
pub struct DiffRequest<'a> {
    /// Baseline image
    pub reference: &'a Path,
    /// Freshly captured screenshot
    pub current: &'a Path,
    /// Where the diff image must be written
    pub diff: &'a Path,
    pub policy: &'a DiffPolicy,
}

/// Compare two image files and render their difference.
#[allow(clippy::result_large_err)]
pub trait ImageComparator: Send + Sync {
    /// Decide whether `current` matches `reference` under `policy`.
    ///
    /// # Errors
    ///
    /// Returns `LkErrorKind::Comparison` when either image cannot be read or
    /// decoded.
    fn images_equal(
        &self,
        reference: &Path,
        current: &Path,
        policy: &DiffPolicy,
    ) -> Result<bool, LkError>;

    /// Write a diff image to `request.diff`, highlighting differing pixels
    /// with `request.policy.highlight_color`.
    ///
    /// # Errors
    ///
    /// Returns `LkErrorKind::Comparison` when decoding fails, or
    /// `LkErrorKind::Io` when the diff image cannot be written.
    fn render_diff(&self, request: &DiffRequest<'_>) -> Result<(), LkError>;
}

/// Byte-for-byte comparator.
///
/// Ignores every policy field: two files match iff their bytes are equal.
/// The diff it renders is a copy of the current screenshot. Useful where
/// captures are fully deterministic and as a stand-in in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactComparator;

impl ImageComparator for ExactComparator {
    fn images_equal(
        &self,
        reference: &Path,
        current: &Path,
        _policy: &DiffPolicy,
    ) -> Result<bool, LkError> {
        let a = read(reference)?;
        let b = read(current)?;
        Ok(a == b)
    }

    fn render_diff(&self, request: &DiffRequest<'_>) -> Result<(), LkError> {
        std::fs::copy(request.current, request.diff).map_err(|e| {
            LkError::new(LkErrorKind::Io)
                .with_op("render_diff")
                .with_path(request.diff)
                .with_message(e.to_string())
        })?;
        Ok(())
    }
}

fn read(path: &Path) -> Result<Vec<u8>, LkError> {
    std::fs::read(path).map_err(|e| {
        LkError::new(LkErrorKind::Comparison)
            .with_op("images_equal")
            .with_path(path)
            .with_message(e.to_string())
    })
}

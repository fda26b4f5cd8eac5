use lookalike_core_types::schema;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Which state-machine transition a reconciliation took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// No baseline existed; the screenshot became the baseline
    Adopt,
    /// Baseline and screenshot matched
    Match,
    /// Mismatch reported; actual and diff images kept for inspection
    Mismatch,
    /// Mismatch in update mode; the screenshot replaced the baseline
    Update,
}

impl Transition {
    /// Stable label used in structured logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Transition::Adopt => schema::TRANSITION_ADOPT,
            Transition::Match => schema::TRANSITION_MATCH,
            Transition::Mismatch => schema::TRANSITION_MISMATCH,
            Transition::Update => schema::TRANSITION_UPDATE,
        }
    }
}

/// Outcome of one reconciliation
///
/// Built only through the per-transition constructors, which guarantees that
/// `actual` and `diff` are present exactly when a mismatch was reported
/// without adopting the screenshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationResult {
    snapshot: PathBuf,
    images_match: bool,
    snapshot_updated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diff: Option<PathBuf>,
}

impl ReconciliationResult {
    /// A brand-new baseline counts as matching: there was nothing to compare
    pub fn adopted(snapshot: PathBuf) -> Self {
        Self {
            snapshot,
            images_match: true,
            snapshot_updated: true,
            actual: None,
            diff: None,
        }
    }

    pub fn matched(snapshot: PathBuf) -> Self {
        Self {
            snapshot,
            images_match: true,
            snapshot_updated: false,
            actual: None,
            diff: None,
        }
    }

    pub fn mismatched(snapshot: PathBuf, actual: PathBuf, diff: PathBuf) -> Self {
        Self {
            snapshot,
            images_match: false,
            snapshot_updated: false,
            actual: Some(actual),
            diff: Some(diff),
        }
    }

    /// Mismatch against the previous baseline, which has now been replaced
    pub fn updated(snapshot: PathBuf) -> Self {
        Self {
            snapshot,
            images_match: false,
            snapshot_updated: true,
            actual: None,
            diff: None,
        }
    }

    pub fn snapshot(&self) -> &Path {
        &self.snapshot
    }

    pub fn images_match(&self) -> bool {
        self.images_match
    }

    pub fn snapshot_updated(&self) -> bool {
        self.snapshot_updated
    }

    pub fn actual(&self) -> Option<&Path> {
        self.actual.as_deref()
    }

    pub fn diff(&self) -> Option<&Path> {
        self.diff.as_deref()
    }

    pub fn transition(&self) -> Transition {
        match (self.images_match, self.snapshot_updated) {
            (true, true) => Transition::Adopt,
            (true, false) => Transition::Match,
            (false, false) => Transition::Mismatch,
            (false, true) => Transition::Update,
        }
    }

    /// Whether an assertion layer should fail the test for this result
    ///
    /// Only a reported, non-adopted mismatch fails; update runs stay green.
    pub fn is_failure(&self) -> bool {
        self.transition() == Transition::Mismatch
    }
}

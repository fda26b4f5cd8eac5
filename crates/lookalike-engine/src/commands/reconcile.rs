//! Snapshot reconciliation.
//!
//! ## State machine (baseline existence × update mode):
//! 1. Screenshot must exist (precondition, nothing touched otherwise)
//! 2. Resolve option layers and build the diff policy
//! 3. Locate snapshot/actual/diff paths
//! 4. No baseline → adopt
//! 5. Baseline → compare
//!    - equal → discard screenshot and stale artifacts
//!    - different, update mode → adopt, report the mismatch
//!    - different → render diff, keep screenshot as actual
//!
//! ## Logging Ownership
//!
//! This module owns lifecycle logging for `reconcile`; the store and the
//! comparators only emit `tracing::debug!()` details.

#![allow(clippy::result_large_err)]

use lookalike_core::errors::LkError;
use lookalike_core::options::resolve;
use lookalike_core::{
    log_op_end, log_op_error, log_op_start, DiffPolicy, DiffRequest, ImageComparator,
    MatchOptions, ReconciliationResult, SnapshotIdentity,
};
use lookalike_core_types::RequestContext;
use lookalike_store::errors::Result;
use lookalike_store::fs::absolute;
use lookalike_store::SnapshotStore;
use std::path::Path;

const OP: &str = "reconcile";

/// Per-call settings that are not match options.
#[derive(Debug, Clone, Default)]
pub struct ReconcileOptions {
    /// Adopt a mismatching screenshot as the new baseline.
    pub update_mode: bool,
    /// Lowest-precedence option layer, usually the settings file defaults.
    pub defaults: MatchOptions,
    pub context: RequestContext,
}

/// Reconcile a captured screenshot against its baseline.
///
/// `overrides` are the per-call match options; they win over
/// `options.defaults` field by field.
///
/// ## Errors
///
/// - `MissingScreenshot`: `screenshot` is not a file
/// - `UnresolvableIdentity`: `screenshot` lies outside the screenshots root
/// - `InvalidInput`: resolved match options fail validation
/// - `Comparison`: the comparator could not decode or diff the images
/// - `Io`: a filesystem transition failed; artifacts may be partial
pub fn reconcile(
    identity: &SnapshotIdentity,
    screenshot: &Path,
    overrides: &MatchOptions,
    options: &ReconcileOptions,
    store: &SnapshotStore,
    comparator: &dyn ImageComparator,
) -> Result<ReconciliationResult> {
    let request_id = options.context.request_id.as_str();
    log_op_start!(
        OP,
        spec = identity.spec(),
        name = identity.name(),
        update_mode = options.update_mode,
        request_id = request_id
    );
    let start = std::time::Instant::now();

    let result = reconcile_impl(identity, screenshot, overrides, options, store, comparator)
        .map_err(|e| {
            let e = e
                .with_snapshot(identity.stem())
                .with_request_id(options.context.request_id.clone());
            log_op_error!(
                OP,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = request_id
            );
            e
        })?;

    log_op_end!(
        OP,
        duration_ms = start.elapsed().as_millis() as u64,
        transition = result.transition().as_str(),
        images_match = result.images_match(),
        snapshot_updated = result.snapshot_updated(),
        request_id = request_id
    );

    Ok(result)
}

fn reconcile_impl(
    identity: &SnapshotIdentity,
    screenshot: &Path,
    overrides: &MatchOptions,
    options: &ReconcileOptions,
    store: &SnapshotStore,
    comparator: &dyn ImageComparator,
) -> Result<ReconciliationResult> {
    store.require_screenshot(screenshot)?;

    let resolved = resolve([&options.defaults, overrides])?;
    let policy = DiffPolicy::build(&resolved);
    let paths = store.locate(identity, screenshot)?;

    if !store.baseline_exists(&paths) {
        store.adopt(&paths, screenshot)?;
        return Ok(ReconciliationResult::adopted(paths.snapshot));
    }

    if comparator.images_equal(&paths.snapshot, screenshot, &policy)? {
        store.discard(&paths, screenshot)?;
        return Ok(ReconciliationResult::matched(paths.snapshot));
    }

    if options.update_mode {
        store.adopt(&paths, screenshot)?;
        return Ok(ReconciliationResult::updated(paths.snapshot));
    }

    let actual = absolute(&paths.actual)?;
    let diff = absolute(&paths.diff)?;
    store.keep_mismatch(&paths, screenshot, |target| {
        render(comparator, &paths.snapshot, screenshot, target, &policy)
    })?;

    Ok(ReconciliationResult::mismatched(paths.snapshot, actual, diff))
}

fn render(
    comparator: &dyn ImageComparator,
    reference: &Path,
    current: &Path,
    diff: &Path,
    policy: &DiffPolicy,
) -> std::result::Result<(), LkError> {
    comparator.render_diff(&DiffRequest {
        reference,
        current,
        diff,
        policy,
    })
}

//! Engine-level commands: the task boundary between runner glue and the core.
//!
//! A command arrives as JSON (`{"spec", "name", "screenshotPath", ...options}`)
//! and leaves as a `ReconciliationResult`.

#![allow(clippy::result_large_err)]

use crate::commands::reconcile::{reconcile, ReconcileOptions};
use lookalike_core::errors::{LkError, LkErrorKind};
use lookalike_core::{ImageComparator, MatchOptions, ReconciliationResult, SnapshotIdentity};
use lookalike_core_types::RequestContext;
use lookalike_store::errors::Result;
use lookalike_store::SnapshotStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Reconcile request as sent by the runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileRequest {
    pub spec: String,
    pub name: String,
    /// Path of the screenshot the capture step just wrote.
    pub screenshot_path: PathBuf,
    #[serde(flatten)]
    pub options: MatchOptions,
}

impl ReconcileRequest {
    /// Parse a request from JSON text.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| {
            LkError::new(LkErrorKind::Serialization)
                .with_op("parse_request")
                .with_message(e.to_string())
        })
    }

    pub fn identity(&self) -> Result<SnapshotIdentity> {
        SnapshotIdentity::new(&self.spec, &self.name)
    }
}

/// Engine-level commands that touch the snapshot tree.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Reconcile one screenshot against its baseline.
    Reconcile {
        request: ReconcileRequest,
        update_mode: bool,
    },
}

/// Shared inputs every command runs against.
pub struct EngineContext<'a> {
    pub store: &'a SnapshotStore,
    pub comparator: &'a dyn ImageComparator,
    /// Settings-file option layer.
    pub defaults: &'a MatchOptions,
    pub request: RequestContext,
}

/// Result of applying an engine command.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommandResult {
    Reconcile(ReconciliationResult),
}

impl EngineCommandResult {
    /// JSON wire form of the result.
    pub fn to_json(&self) -> Result<String> {
        let rendered = match self {
            EngineCommandResult::Reconcile(result) => serde_json::to_string_pretty(result),
        };
        rendered.map_err(|e| {
            LkError::new(LkErrorKind::Serialization)
                .with_op("render_result")
                .with_message(e.to_string())
        })
    }
}

/// Apply an engine command.
pub fn apply_engine_command(
    cmd: EngineCommand,
    ctx: &EngineContext<'_>,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::Reconcile {
            request,
            update_mode,
        } => {
            let identity = request.identity()?;
            let options = ReconcileOptions {
                update_mode,
                defaults: ctx.defaults.clone(),
                context: ctx.request.clone(),
            };
            let result = reconcile(
                &identity,
                &request.screenshot_path,
                &request.options,
                &options,
                ctx.store,
                ctx.comparator,
            )?;
            Ok(EngineCommandResult::Reconcile(result))
        }
    }
}

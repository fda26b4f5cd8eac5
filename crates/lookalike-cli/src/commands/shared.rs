//! Pieces shared by the subcommands: match-option flags, settings loading,
//! and running a reconcile request through the engine.

use clap::Args;
use lookalike_compare::PixelComparator;
use lookalike_core::{MatchOptions, ReconciliationResult, Settings};
use lookalike_core_types::RequestContext;
use lookalike_engine::{
    apply_engine_command, EngineCommand, EngineCommandResult, EngineContext, ReconcileRequest,
};
use lookalike_store::{SnapshotLayout, SnapshotStore};
use std::path::Path;

/// Match options as command-line flags; unset flags stay unset
#[derive(Debug, Args, Default)]
pub struct MatchArgs {
    /// Require exact pixel equality
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub strict: Option<bool>,

    /// Colour distance (CIE76 ΔE) tolerated per pixel; 0 means strict
    #[arg(long)]
    pub tolerance: Option<f64>,

    #[arg(long)]
    pub pixel_ratio: Option<f64>,

    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub ignore_caret: Option<bool>,

    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub ignore_antialiasing: Option<bool>,

    #[arg(long)]
    pub antialiasing_tolerance: Option<f64>,

    /// Colour used to mark differing pixels in the diff image (#rgb or #rrggbb)
    #[arg(long)]
    pub highlight_color: Option<String>,
}

impl From<MatchArgs> for MatchOptions {
    fn from(args: MatchArgs) -> Self {
        MatchOptions {
            strict: args.strict,
            tolerance: args.tolerance,
            pixel_ratio: args.pixel_ratio,
            ignore_caret: args.ignore_caret,
            ignore_antialiasing: args.ignore_antialiasing,
            antialiasing_tolerance: args.antialiasing_tolerance,
            highlight_color: args.highlight_color,
        }
    }
}

/// Settings file (explicit or discovered) with environment overrides applied
pub fn load_settings(config: Option<&Path>) -> Result<Settings, Box<dyn std::error::Error>> {
    Ok(Settings::discover(config)?.apply_env()?)
}

/// Run one reconcile request with the built-in pixel comparator
pub fn run_request(
    request: ReconcileRequest,
    update_mode: bool,
    settings: &Settings,
) -> Result<ReconciliationResult, Box<dyn std::error::Error>> {
    let store = SnapshotStore::new(SnapshotLayout::new(
        &settings.snapshots_dir,
        &settings.screenshots_dir,
    ));
    let comparator = PixelComparator::new();
    let ctx = EngineContext {
        store: &store,
        comparator: &comparator,
        defaults: &settings.defaults,
        request: RequestContext::new(),
    };

    match apply_engine_command(
        EngineCommand::Reconcile {
            request,
            update_mode,
        },
        &ctx,
    )? {
        EngineCommandResult::Reconcile(result) => Ok(result),
    }
}

/// Print a result as pretty JSON on stdout
pub fn print_result(result: ReconciliationResult) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", EngineCommandResult::Reconcile(result).to_json()?);
    Ok(())
}

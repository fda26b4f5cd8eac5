//! `lookalike reconcile`

use crate::commands::shared::{load_settings, print_result, run_request, MatchArgs};
use clap::Args;
use lookalike_engine::ReconcileRequest;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ReconcileArgs {
    /// Spec (test file) the snapshot belongs to
    #[arg(long)]
    pub spec: String,

    /// Snapshot name within the spec
    #[arg(long)]
    pub name: String,

    /// Screenshot written by the capture step
    #[arg(long)]
    pub screenshot: PathBuf,

    /// Adopt the screenshot as the new baseline when it differs
    #[arg(long)]
    pub update: bool,

    /// Exit non-zero when the images differ and were not adopted
    #[arg(long)]
    pub assert: bool,

    /// With --assert, report the difference but exit zero
    #[arg(long)]
    pub continue_on_mismatch: bool,

    #[command(flatten)]
    pub options: MatchArgs,
}

pub fn execute(args: ReconcileArgs, config: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(config)?;
    let update_mode = args.update || settings.update_snapshots;
    let continue_on_mismatch = args.continue_on_mismatch || settings.continue_when_looks_different;

    let name = args.name.clone();
    let request = ReconcileRequest {
        spec: args.spec,
        name: args.name,
        screenshot_path: args.screenshot,
        options: args.options.into(),
    };

    let result = run_request(request, update_mode, &settings)?;
    let failed = result.is_failure();
    print_result(result)?;

    if args.assert && failed {
        let message = format!("'{}' image looks different", name);
        if continue_on_mismatch {
            eprintln!("{}", message);
        } else {
            return Err(message.into());
        }
    }

    Ok(())
}

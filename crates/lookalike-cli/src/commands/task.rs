//! `lookalike task` - the JSON request/response seam for runner glue

use crate::commands::shared::{load_settings, print_result, run_request};
use clap::Args;
use lookalike_engine::ReconcileRequest;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Read the request from this file instead of stdin
    #[arg(long)]
    pub request: Option<PathBuf>,

    /// Adopt mismatching screenshots as new baselines
    #[arg(long)]
    pub update: bool,
}

pub fn execute(args: TaskArgs, config: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(config)?;

    let raw = match &args.request {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let request = ReconcileRequest::from_json(&raw)?;

    let result = run_request(request, args.update || settings.update_snapshots, &settings)?;
    print_result(result)
}

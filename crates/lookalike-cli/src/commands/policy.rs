//! `lookalike policy` - show the diff policy a set of options produces

use crate::commands::shared::{load_settings, MatchArgs};
use clap::Args;
use lookalike_core::options::resolve;
use lookalike_core::{DiffPolicy, MatchOptions};
use std::path::Path;

#[derive(Debug, Args)]
pub struct PolicyArgs {
    #[command(flatten)]
    pub options: MatchArgs,
}

pub fn execute(args: PolicyArgs, config: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(config)?;
    let overrides: MatchOptions = args.options.into();
    let resolved = resolve([&settings.defaults, &overrides])?;

    println!(
        "{}",
        serde_json::to_string_pretty(&DiffPolicy::build(&resolved))?
    );
    Ok(())
}

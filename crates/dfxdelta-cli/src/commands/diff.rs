//! Diff command
//!
//! Usage: dfxdelta diff <PRE> <POST> [--output <FILE>] [--summary] [--config <FILE>] [--debug]

use clap::Args;
use std::path::PathBuf;

use dfxdelta_core::logging_facility::Profile;
use dfxdelta_core::{reconcile, render_human_summary, ResultSink, SnapshotSource};
use dfxdelta_store::{DeltaConfig, JsonDocumentSink, JsonDocumentSource};

use super::{init_logging, open_output};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Older snapshot followed by the newer one
    #[arg(value_name = "SNAPSHOT")]
    pub inputs: Vec<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a Markdown summary to stderr
    #[arg(long)]
    pub summary: bool,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => DeltaConfig::load(path)?,
        None => DeltaConfig::default(),
    };
    let profile = config.logging_profile()?.unwrap_or(Profile::Development);
    init_logging(profile, args.debug);

    let sources: Vec<JsonDocumentSource> =
        args.inputs.iter().map(JsonDocumentSource::new).collect();
    let refs: Vec<&dyn SnapshotSource> = sources.iter().map(|s| s as &dyn SnapshotSource).collect();

    let result = reconcile(&refs, &config.to_options())?;

    let mut sink = JsonDocumentSink::new(open_output(args.output.as_deref())?);
    sink.write_result(&result)?;

    if args.summary {
        eprint!("{}", render_human_summary(&result));
    }
    Ok(())
}

//! Cat command
//!
//! Usage: dfxdelta cat <FILE> [--output <FILE>] [--debug]

use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use dfxdelta_core::logging_facility::Profile;
use dfxdelta_store::{cat_fileobjects, JsonDocumentSource};

use super::{init_logging, open_output};

#[derive(Debug, Args)]
pub struct CatArgs {
    /// Snapshot document to re-emit
    pub input: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Execute cat command
pub fn execute(args: CatArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(Profile::Development, args.debug);

    // The output is only opened once the input has rendered
    let source = JsonDocumentSource::new(&args.input);
    let mut rendered = Vec::new();
    cat_fileobjects(&source, &mut rendered)?;

    let mut out = open_output(args.output.as_deref())?;
    out.write_all(&rendered)?;
    out.flush()?;
    Ok(())
}

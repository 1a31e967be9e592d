pub mod cat;
pub mod diff;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use dfxdelta_core::logging_facility::{init_with_default_filter, Profile};

/// Start logging on stderr; quiet unless `--debug` or `RUST_LOG` asks otherwise
pub fn init_logging(profile: Profile, debug: bool) {
    let filter = if debug { "dfxdelta=debug" } else { "dfxdelta=warn" };
    init_with_default_filter(profile, Some(filter));
}

/// Open the output file, or stdout when none is given
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

// Library interface for bootlog
// Resolves `--loglevel` and initializes process-wide logging

pub mod cli;
pub mod errors;
pub mod level;
pub mod logging;

use std::ffi::OsString;

use clap::Parser;

use crate::cli::Args;
use crate::logging::LoggingConfig;

/// Resolve parsed arguments and initialize logging.
///
/// Resolution happens first, so an invalid level leaves logging untouched.
pub fn run(args: &Args) -> errors::Result<LoggingConfig> {
    let config = args.logging_config()?;
    logging::init(&config)?;
    Ok(config)
}

/// Parse an argument sequence (program name first) and run it.
pub fn bootstrap<I, T>(args: I) -> anyhow::Result<LoggingConfig>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(args)?;
    Ok(run(&args)?)
}

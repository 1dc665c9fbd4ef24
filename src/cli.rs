// src/cli.rs
//
// Command-line arguments and their resolution into a logging configuration

use clap::Parser;

use crate::errors::Result;
use crate::level::Severity;
use crate::logging::{LogFormat, LoggingConfig};

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about,
    long_about = "Validate a log level and initialize process-wide logging",
    infer_long_args = true
)]
pub struct Args {
    /// Logging level
    #[arg(
        long,
        alias = "log-level",
        value_name = "LEVEL",
        default_value = "WARNING",
        help = "Minimum severity to emit (NOTSET, TRACE, DEBUG, INFO, WARNING, ERROR, CRITICAL), case-insensitive"
    )]
    pub loglevel: String,

    /// Log record format
    #[arg(long, value_name = "FORMAT", value_enum, default_value_t = LogFormat::Text, help = "Log output format")]
    pub format: LogFormat,
}

impl Args {
    /// Resolve the raw arguments into a validated logging configuration.
    ///
    /// Fails with an invalid log level error naming the offending value.
    pub fn logging_config(&self) -> Result<LoggingConfig> {
        let level: Severity = self.loglevel.parse()?;
        Ok(LoggingConfig {
            level,
            format: self.format,
        })
    }
}

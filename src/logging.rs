// src/logging.rs
//
// Process-wide logging initialization

use std::fmt;
use std::io::{self, IsTerminal};

use clap::ValueEnum;
use once_cell::sync::OnceCell;
use tracing::debug;
use tracing_log::LogTracer;

use crate::errors::{BootlogError, Result};
use crate::level::Severity;

/// Output format for log records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => f.write_str("text"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Logging configuration resolved from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoggingConfig {
    pub level: Severity,
    pub format: LogFormat,
}

/// Which handler receives records after [`init`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// bootlog installed its stderr subscriber
    Installed,
    /// A global subscriber was already set by the host process and left alone
    Existing,
}

#[derive(Debug)]
struct Active {
    config: LoggingConfig,
    handler: Handler,
}

static ACTIVE: OnceCell<Active> = OnceCell::new();

/// Initialize process-wide logging.
///
/// The first call installs a stderr subscriber filtered at `config.level`,
/// unless a global subscriber already exists. Later calls with an equal
/// config are no-ops; a different config is rejected and the active one
/// stays in place.
///
/// `tracing` has no level above ERROR, so a CRITICAL threshold still lets
/// ERROR records through.
pub fn init(config: &LoggingConfig) -> Result<Handler> {
    let active = ACTIVE.get_or_init(|| Active {
        config: *config,
        handler: install(config),
    });

    if active.config != *config {
        return Err(BootlogError::already_initialized(&active.config, config));
    }

    Ok(active.handler)
}

/// The threshold requested by the first [`init`], if logging has been
/// initialized.
///
/// With [`Handler::Existing`] this is only the requested level: the host's
/// subscriber decides what is emitted. A CRITICAL threshold is enforced as
/// ERROR by the installed subscriber.
pub fn threshold() -> Option<Severity> {
    ACTIVE.get().map(|active| active.config.level)
}

/// The full configuration requested by the first [`init`]
pub fn active() -> Option<LoggingConfig> {
    ACTIVE.get().map(|active| active.config)
}

/// The handler chosen by the first [`init`]
pub fn handler() -> Option<Handler> {
    ACTIVE.get().map(|active| active.handler)
}

fn install(config: &LoggingConfig) -> Handler {
    if tracing::dispatcher::has_been_set() {
        return Handler::Existing;
    }

    let builder = tracing_subscriber::fmt()
        .with_max_level(config.level.level_filter())
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal());

    // Only fails when another global subscriber won the race
    let result = match config.format {
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish()),
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
    };
    if result.is_err() {
        return Handler::Existing;
    }

    // `log` records are bridged only if the host has not registered a logger
    if let Err(e) = LogTracer::init() {
        debug!(error = %e, "log records stay with the existing logger");
    }

    Handler::Installed
}

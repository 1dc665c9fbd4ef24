// src/level.rs
//
// Severity levels and their numeric ranks

use std::fmt;
use std::str::FromStr;

use tracing::level_filters::LevelFilter;

use crate::errors::{BootlogError, Result};

/// A named, ranked log severity.
///
/// Variants are declared in rank order, so the derived `Ord` agrees with
/// [`Severity::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    NotSet,
    Trace,
    Debug,
    Info,
    #[default]
    Warning,
    Error,
    Critical,
}

/// Name-to-level lookup table. Aliases share the rank of their canonical level.
const NAMES: &[(&str, Severity)] = &[
    ("NOTSET", Severity::NotSet),
    ("TRACE", Severity::Trace),
    ("DEBUG", Severity::Debug),
    ("INFO", Severity::Info),
    ("WARNING", Severity::Warning),
    ("WARN", Severity::Warning),
    ("ERROR", Severity::Error),
    ("CRITICAL", Severity::Critical),
    ("FATAL", Severity::Critical),
];

impl Severity {
    /// Every level, lowest rank first.
    pub const ALL: [Severity; 7] = [
        Severity::NotSet,
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Numeric rank; records below the configured rank are suppressed.
    pub fn rank(self) -> u8 {
        match self {
            Severity::NotSet => 0,
            Severity::Trace => 5,
            Severity::Debug => 10,
            Severity::Info => 20,
            Severity::Warning => 30,
            Severity::Error => 40,
            Severity::Critical => 50,
        }
    }

    /// Canonical upper-case name
    pub fn name(self) -> &'static str {
        match self {
            Severity::NotSet => "NOTSET",
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Look up a level by name, ignoring case.
    ///
    /// The name must match exactly once upper-cased: no trimming, no numeric
    /// ranks.
    pub fn from_name(name: &str) -> Option<Severity> {
        let upper = name.to_uppercase();
        NAMES
            .iter()
            .find(|(candidate, _)| *candidate == upper)
            .map(|(_, severity)| *severity)
    }

    /// The `tracing` filter enforcing this threshold.
    ///
    /// `tracing` has no level above ERROR, so CRITICAL filters like ERROR.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Severity::NotSet | Severity::Trace => LevelFilter::TRACE,
            Severity::Debug => LevelFilter::DEBUG,
            Severity::Info => LevelFilter::INFO,
            Severity::Warning => LevelFilter::WARN,
            Severity::Error | Severity::Critical => LevelFilter::ERROR,
        }
    }
}

impl FromStr for Severity {
    type Err = BootlogError;

    fn from_str(s: &str) -> Result<Self> {
        Severity::from_name(s).ok_or_else(|| BootlogError::invalid_log_level(s))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

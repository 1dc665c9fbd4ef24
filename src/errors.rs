// Custom error types for bootlog with error codes for programmatic handling

use std::fmt;
use thiserror::Error;

use crate::level::Severity;
use crate::logging::LoggingConfig;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Configuration errors (1000-1999)
    InvalidLogLevel = 1001,

    /// Logging facility errors (2000-2999)
    AlreadyInitialized = 2001,
}

impl ErrorCode {
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// Main error type for bootlog operations
#[derive(Error, Debug)]
pub enum BootlogError {
    #[error("Invalid configuration: {message} (code: {code})")]
    Config {
        message: String,
        code: ErrorCode,
    },

    #[error("Logging error: {message} (code: {code})")]
    Logging {
        message: String,
        code: ErrorCode,
    },
}

impl BootlogError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BootlogError::Config { code, .. } => *code,
            BootlogError::Logging { code, .. } => *code,
        }
    }
}

// Helper functions for creating errors
impl BootlogError {
    pub fn invalid_log_level(value: &str) -> Self {
        let accepted: Vec<&str> = Severity::ALL.iter().map(|s| s.name()).collect();
        BootlogError::Config {
            message: format!(
                "Invalid log level: {} (expected one of {})",
                value,
                accepted.join(", ")
            ),
            code: ErrorCode::InvalidLogLevel,
        }
    }

    pub fn already_initialized(active: &LoggingConfig, requested: &LoggingConfig) -> Self {
        BootlogError::Logging {
            message: format!(
                "Logging already initialized at {} ({}), refusing to reconfigure to {} ({})",
                active.level, active.format, requested.level, requested.format
            ),
            code: ErrorCode::AlreadyInitialized,
        }
    }
}

/// Result type alias for bootlog operations
pub type Result<T> = std::result::Result<T, BootlogError>;

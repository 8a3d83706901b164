//! CLI-specific error types and mappings.
//!
//! Maps core errors to exit codes and user-facing messages.

use recipebox_core::{CoreError, PathError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Invalid input (bad arguments or a rejected recipe).
    #[error("Invalid input: {0}")]
    Arguments(String),

    /// The addressed recipe does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The data file could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,
            Self::NotFound(_) => 66, // EX_NOINPUT
            Self::Storage(_) => 74,  // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Store(store_err) => Self::Storage(store_err.to_string()),
            CoreError::Validation(validation_err) => Self::Arguments(validation_err.to_string()),
            e @ CoreError::NotFound { .. } => Self::NotFound(e.to_string()),
            CoreError::Internal(msg) => Self::Core(msg),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Exit code for an error coming out of a command.
///
/// Errors that are not a [`CliError`] exit with 1.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}

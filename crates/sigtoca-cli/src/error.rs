//! CLI error types.

use std::io;

use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error (event file, stdin, etc.).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The event JSON could not be parsed.
    #[error("invalid event: {0}")]
    Event(#[from] serde_json::Error),

    /// Error from the core helpers.
    #[error(transparent)]
    Core(#[from] sigtoca_core::Error),

    /// Action failed (open in browser).
    #[error("action failed: {0}")]
    Action(String),
}

impl From<sigtoca_core::TemplateError> for CliError {
    fn from(err: sigtoca_core::TemplateError) -> Self {
        Self::Core(err.into())
    }
}

impl From<sigtoca_core::DomError> for CliError {
    fn from(err: sigtoca_core::DomError) -> Self {
        Self::Core(err.into())
    }
}

//! Error types for the printer library

use thiserror::Error;

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// Network connection error (refused, unreachable, reset)
    #[error("Connection failed: {0}")]
    Connection(String),

    /// IO error while writing the payload
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Timeout waiting for the printer
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Invalid printer configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Anything else on the send path
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;

//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Queue error (resolution or backend)
    #[error("Queue error: {0}")]
    Queue(#[from] qsweep_queue::QueueError),

    /// Sweep operation error
    #[error("Sweep error: {0}")]
    Sweep(#[from] qsweep_sweeper::SweepError),

    /// Watermark store error
    #[error("Watermark store error: {0}")]
    Store(#[from] qsweep_store::StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

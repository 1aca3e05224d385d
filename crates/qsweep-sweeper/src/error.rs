//! Error types for sweep operations

use thiserror::Error;

/// Errors that can occur during sweep operations
///
/// No variant is retried anywhere in this crate; every failure propagates
/// to the invoking caller. A sweep that fails mid-pass has not advanced the
/// watermark, so re-invocation is safe.
#[derive(Error, Debug)]
pub enum SweepError {
    /// Queue backend error (push, delete, size, iteration, durability wait)
    #[error("Queue error: {0}")]
    Queue(String),

    /// Watermark store error
    #[error("Watermark store error: {0}")]
    Watermark(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

//! Error types for queue operations

use thiserror::Error;

/// Errors that can occur during queue operations
#[derive(Error, Debug)]
pub enum QueueError {
    /// No backend configured for the requested job type
    #[error("No queue backend configured for job type '{0}'")]
    NotFound(String),

    /// Backend failure (push, delete, size, or durability wait)
    #[error("Queue backend error: {0}")]
    Backend(String),

    /// Malformed job data in a fixture
    #[error("Invalid job data: {0}")]
    InvalidJob(String),
}

//! Error types for queue operations

use thiserror::Error;

/// Queue error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// A removal was attempted on a queue with zero elements
    #[error("queue is empty, no car to serve")]
    Empty,
}

/// Result type for queue operations
pub type Result<T> = std::result::Result<T, QueueError>;

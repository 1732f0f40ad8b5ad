//! Error types for queue operations

use crate::handle::QueueId;
use std::collections::TryReserveError;
use thiserror::Error;

/// Queue error types
///
/// Every failure an operation can report. None of these are fatal to the
/// process: mutating operations leave the queue untouched when they fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// The handle does not name a live queue (never created, or already
    /// destroyed)
    #[error("Unknown queue handle: {0}")]
    InvalidHandle(QueueId),

    /// A node or string copy could not be allocated
    #[error("Allocation failed: {0}")]
    AllocationFailure(String),

    /// Removal was attempted on a queue with no elements
    #[error("Queue is empty")]
    EmptyQueue,
}

impl From<TryReserveError> for QueueError {
    fn from(e: TryReserveError) -> Self {
        QueueError::AllocationFailure(e.to_string())
    }
}

/// Result type for queue operations
pub type Result<T> = std::result::Result<T, QueueError>;
